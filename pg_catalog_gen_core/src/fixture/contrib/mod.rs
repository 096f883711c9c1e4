// Code generated by pg-catalog-gen. DO NOT EDIT.

pub mod pgcrypto;
pub mod uuid_ossp;
