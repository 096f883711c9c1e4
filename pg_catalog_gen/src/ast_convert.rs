//! Turns normalized catalog records into Rust syntax
//!
//! Every generated module has the same shape:
//!
//! ```ignore
//! // Code generated by pg-catalog-gen. DO NOT EDIT.
//! #![allow(unused_imports)]
//! use pg_catalog_gen_core::{...};
//!
//! fn funcs_gen_pg_catalog() -> Vec<Function> {
//! 	vec![
//! 		Function {
//! 			name: "lower".to_string(),
//! 			args: vec![Argument { type_name: TypeName::new("text"), ..Default::default() }],
//! 			return_type: TypeName::new("text"),
//! 		},
//! 		// ...
//! 	]
//! }
//!
//! pub fn gen_pg_catalog() -> Schema {
//! 	let mut s = Schema::new("pg_catalog");
//! 	s.funcs = funcs_gen_pg_catalog();
//! 	s.tables = vec![/* only when the schema has relations */];
//! 	s
//! }
//! ```
//!
//! Fields holding their default value are left out of the literals.

mod catalog_funcs;
mod catalog_tables;
mod loader;

pub use loader::{contrib_mod_to_rust, extension_loader_to_rust, root_mod_to_rust};

use super::sql_tree::*;
use heck::ToSnakeCase;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

pub const GENERATED_HEADER: &str = "// Code generated by pg-catalog-gen. DO NOT EDIT.\n\n";

/// Formats `name` as a snake_case identifier; keywords and other invalid identifiers are an error
pub fn format_heck(name: &str) -> syn::Result<Ident> {
	syn::parse_str(&name.to_snake_case())
}

/// Everything needed to render one schema module
pub struct CatalogModule<'a> {
	pub schema_name: &'a str,
	pub gen_fn_name: &'a str,
	pub procs: &'a [Proc],
	pub relations: &'a [Relation],
}

pub fn schema_to_rust(module: &CatalogModule) -> syn::Result<TokenStream> {
	let fn_name = format_heck(module.gen_fn_name)?;
	let funcs_fn = format_ident!("funcs_{}", fn_name);
	let schema_name = module.schema_name;

	let funcs = module.procs.iter().map(catalog_funcs::proc_to_rust);
	let tables = if module.relations.is_empty() {
		quote! {}
	} else {
		let tables = module.relations.iter().map(catalog_tables::relation_to_rust);
		quote! {
			s.tables = vec![ #(#tables),* ];
		}
	};

	Ok(quote! {
		#![allow(unused_imports)]
		use pg_catalog_gen_core::{
			Argument, Column, FuncParamMode, Function, Schema, Table, TableName, TypeName,
		};

		fn #funcs_fn() -> Vec<Function> {
			vec![ #(#funcs),* ]
		}

		pub fn #fn_name() -> Schema {
			let mut s = Schema::new(#schema_name);
			s.funcs = #funcs_fn();
			#tables
			s
		}
	})
}

/// Parses generated tokens and pretty prints them behind the generated-code header
///
/// A parse failure here means the template or the data fed into it is wrong
pub fn format_rust(tokens: TokenStream) -> syn::Result<String> {
	let file: syn::File = syn::parse2(tokens)?;
	Ok(format!("{}{}", GENERATED_HEADER, prettyplease::unparse(&file)))
}
