//! Contains a derive macro for `TryFromRow` which converts a tokio-postgres `Row` into a struct
//!
//! Fields are read by position, so the field order of the struct must match the column order of the select statement
//! it decodes. The generated impl names `TryFromRow`, `Row` and `SqlError` unqualified; they must be in scope where the
//! derive is used.

extern crate proc_macro;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

#[proc_macro_derive(TryFromRow)]
/// A derive macro for `TryFromRow` which converts from a tokio-postgres Row
pub fn try_from_row(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	match gen(input.into()) {
		Ok(tokens) => tokens,
		Err(err) => err.to_compile_error(),
	}
	.into()
}

fn gen(input: TokenStream) -> Result<TokenStream> {
	let input: DeriveInput = syn::parse2(input)?;

	let name = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let fields = match &input.data {
		Data::Struct(s) => &s.fields,
		Data::Enum(_) | Data::Union(_) => {
			return Err(syn::Error::new_spanned(
				name,
				"TryFromRow can only be derived for structs",
			))
		},
	};

	let body = match fields {
		Fields::Named(named) => {
			let getters = named.named.iter().enumerate().map(|(i, f)| {
				let ident = &f.ident;
				quote! { #ident: row.try_get(#i)? }
			});
			quote! { Ok(Self { #(#getters),* }) }
		},
		Fields::Unnamed(unnamed) => {
			let getters = (0..unnamed.unnamed.len()).map(|i| quote! { row.try_get(#i)? });
			quote! { Ok(Self( #(#getters),* )) }
		},
		Fields::Unit => {
			return Err(syn::Error::new_spanned(
				name,
				"TryFromRow needs at least one field to decode",
			))
		},
	};

	Ok(quote! {
		impl #impl_generics TryFromRow for #name #ty_generics #where_clause {
			fn from_row(row: &Row) -> ::core::result::Result<Self, SqlError> {
				#body
			}
		}
	})
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proc_macro2::TokenStream;
	use syn::File;

	fn pretty_print(output: TokenStream) -> String {
		let output: File = syn::parse2(output).unwrap();
		prettyplease::unparse(&output)
	}

	fn squash(s: &str) -> String {
		s.split_whitespace().collect::<Vec<_>>().join(" ")
	}

	#[test]
	fn named_fields_read_in_declaration_order() {
		let input: TokenStream = str::parse(
			"struct GetTables { schema: String, name: String }",
		)
		.unwrap();

		let output = pretty_print(super::gen(input).unwrap());

		assert!(output.contains("impl TryFromRow for GetTables"));
		let output = squash(&output);
		assert!(output.contains("schema: row.try_get(0usize)?"), "{}", output);
		assert!(output.contains("name: row.try_get(1usize)?"), "{}", output);
	}

	#[test]
	fn tuple_structs_supported() {
		let input: TokenStream = str::parse("struct Count(i64);").unwrap();
		let output = squash(&pretty_print(super::gen(input).unwrap()));
		assert!(output.contains("Ok(Self(row.try_get(0usize)?))"), "{}", output);
	}

	#[test]
	fn enums_rejected() {
		let input: TokenStream = str::parse("enum Mode { In, Out }").unwrap();
		let err = super::gen(input).unwrap_err();
		assert_eq!(err.to_string(), "TryFromRow can only be derived for structs");
	}

	#[test]
	fn unit_structs_rejected() {
		let input: TokenStream = str::parse("struct Nothing;").unwrap();
		assert!(super::gen(input).is_err());
	}
}
