// Code generated by pg-catalog-gen. DO NOT EDIT.

pub mod contrib;
pub mod extension;
pub mod pg_catalog;
pub mod information_schema;
pub use extension::load_extension;
pub use pg_catalog::gen_pg_catalog;
pub use information_schema::gen_information_schema;
