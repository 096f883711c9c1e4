//! Connects to a PostgreSQL instance and generates Rust modules describing the functions, tables and columns of its
//! built-in schemas and bundled extensions
//!
//! The generated modules build [`pg_catalog_gen_core::Schema`] values for a query analysis engine that has no live
//! database to ask.

pub mod ast_convert;
pub mod compat;
pub mod config;
pub mod connection;
pub mod driver;
pub mod emit;
pub mod error;
pub mod extensions;
pub mod normalize;
pub mod pg_select_types;
pub mod sql_tree;
mod try_from_row;

pub use config::Opt;
pub use connection::{connect, CatalogClient, Introspector};
pub use driver::run;
pub use error::{Error, Result};
pub use sql_tree::RunReport;
