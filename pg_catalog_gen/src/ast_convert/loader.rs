//! The extension dispatch module, the `contrib` module index and the output directory's `mod.rs`
use super::super::sql_tree::{ExtensionEntry, SchemaToLoad};
use super::format_heck;
use proc_macro2::TokenStream;
use quote::quote;

/// Renders `extension.rs`, mapping each generated extension's name to its schema function
///
/// ```ignore
/// static EXTENSIONS: ExtensionRegistry = ExtensionRegistry::new(&[
/// 	("pgcrypto", contrib::pgcrypto::pgcrypto),
/// 	("uuid-ossp", contrib::uuid_ossp::uuid_ossp),
/// ]);
///
/// pub fn load_extension(name: &str) -> Option<Schema> {
/// 	EXTENSIONS.load(name)
/// }
/// ```
pub fn extension_loader_to_rust(entries: &[ExtensionEntry]) -> syn::Result<TokenStream> {
	let pairs = entries
		.iter()
		.map(|e| {
			let name = &e.name;
			let module = format_heck(&e.module)?;
			let func = format_heck(&e.func_name)?;
			Ok(quote! { (#name, contrib::#module::#func) })
		})
		.collect::<syn::Result<Vec<_>>>()?;

	Ok(quote! {
		#![allow(unused_imports)]
		use super::contrib;
		use pg_catalog_gen_core::{ExtensionRegistry, Schema};

		static EXTENSIONS: ExtensionRegistry = ExtensionRegistry::new(&[ #(#pairs),* ]);

		/// Returns the schema for a generated extension, or `None` for any other name
		pub fn load_extension(name: &str) -> Option<Schema> {
			EXTENSIONS.load(name)
		}
	})
}

/// Renders `contrib/mod.rs` declaring one module per generated extension file
pub fn contrib_mod_to_rust(entries: &[ExtensionEntry]) -> syn::Result<TokenStream> {
	let modules = entries
		.iter()
		.map(|e| format_heck(&e.module))
		.collect::<syn::Result<Vec<_>>>()?;
	Ok(quote! {
		#( pub mod #modules; )*
	})
}

/// Renders the `mod.rs` of the output directory, declaring every generated module and re-exporting the entry points
///
/// ```ignore
/// pub mod contrib;
/// pub mod extension;
/// pub mod pg_catalog;
/// pub mod information_schema;
/// pub use extension::load_extension;
/// pub use pg_catalog::gen_pg_catalog;
/// pub use information_schema::gen_information_schema;
/// ```
pub fn root_mod_to_rust(schemas: &[SchemaToLoad]) -> syn::Result<TokenStream> {
	let modules = schemas
		.iter()
		.map(|s| format_heck(s.file_name.trim_end_matches(".rs")))
		.collect::<syn::Result<Vec<_>>>()?;
	let ctors = schemas
		.iter()
		.map(|s| format_heck(s.gen_fn_name))
		.collect::<syn::Result<Vec<_>>>()?;
	Ok(quote! {
		pub mod contrib;
		pub mod extension;
		#( pub mod #modules; )*

		pub use extension::load_extension;
		#( pub use #modules::#ctors; )*
	})
}
