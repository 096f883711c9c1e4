//! Table literals
use super::super::sql_tree::*;
use proc_macro2::{Literal, TokenStream};
use quote::quote;

pub fn relation_to_rust(rel: &Relation) -> TokenStream {
	let catalog = &rel.catalog;
	let schema = &rel.schema;
	let name = &rel.name;
	let columns = rel.columns.iter().map(column_to_rust);
	quote! {
		Table {
			rel: TableName {
				catalog: #catalog.to_string(),
				schema: #schema.to_string(),
				name: #name.to_string(),
			},
			columns: vec![ #(#columns),* ],
		}
	}
}

fn column_to_rust(col: &Column) -> TokenStream {
	let name = &col.name;
	let typ = &col.type_name;
	let mut fields = vec![quote! { name: #name.to_string() }, quote! { type_name: TypeName::new(#typ) }];
	let mut omitted = false;

	if col.is_not_null {
		fields.push(quote! { is_not_null: true });
	} else {
		omitted = true;
	}
	if col.is_array {
		fields.push(quote! { is_array: true });
	} else {
		omitted = true;
	}
	match col.length {
		Some(len) => {
			let len = Literal::i32_unsuffixed(len);
			fields.push(quote! { length: Some(#len) });
		}
		None => omitted = true,
	}

	let rest = if omitted {
		quote! { , ..Default::default() }
	} else {
		quote! {}
	};
	quote! {
		Column { #(#fields),* #rest }
	}
}
