// Code generated by pg-catalog-gen. DO NOT EDIT.

#![allow(unused_imports)]
use super::contrib;
use pg_catalog_gen_core::{ExtensionRegistry, Schema};
static EXTENSIONS: ExtensionRegistry = ExtensionRegistry::new(
    &[
        ("pgcrypto", contrib::pgcrypto::pgcrypto),
        ("uuid-ossp", contrib::uuid_ossp::uuid_ossp),
    ],
);
/// Returns the schema for a generated extension, or `None` for any other name
pub fn load_extension(name: &str) -> Option<Schema> {
    EXTENSIONS.load(name)
}
