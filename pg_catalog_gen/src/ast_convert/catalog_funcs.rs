//! Function literals
use super::super::sql_tree::*;
use proc_macro2::TokenStream;
use quote::quote;

/// Renders one `Function { .. }` literal
///
/// ```ignore
/// Function {
/// 	name: "gen_salt".to_string(),
/// 	args: vec![
/// 		Argument { name: "type".to_string(), type_name: TypeName::new("text"), ..Default::default() },
/// 		Argument { name: "iter_count".to_string(), type_name: TypeName::new("integer"), has_default: true, ..Default::default() },
/// 	],
/// 	return_type: TypeName::new("text"),
/// }
/// ```
pub fn proc_to_rust(proc: &Proc) -> TokenStream {
	let name = &proc.name;
	let ret = &proc.return_type;
	let args = proc.args.iter().map(arg_to_rust);
	quote! {
		Function {
			name: #name.to_string(),
			args: vec![ #(#args),* ],
			return_type: TypeName::new(#ret),
		}
	}
}

fn arg_to_rust(arg: &Arg) -> TokenStream {
	let typ = &arg.type_name;
	let mut fields = Vec::new();
	let mut omitted = false;

	if arg.name.is_empty() {
		omitted = true;
	} else {
		let name = &arg.name;
		fields.push(quote! { name: #name.to_string() });
	}
	fields.push(quote! { type_name: TypeName::new(#typ) });
	if arg.has_default {
		fields.push(quote! { has_default: true });
	} else {
		omitted = true;
	}
	match mode_to_rust(arg.mode) {
		Some(mode) => fields.push(quote! { mode: #mode }),
		None => omitted = true,
	}

	let rest = if omitted {
		quote! { , ..Default::default() }
	} else {
		quote! {}
	};
	quote! {
		Argument { #(#fields),* #rest }
	}
}

/// `None` for the implicit input mode
fn mode_to_rust(mode: ArgMode) -> Option<TokenStream> {
	match mode {
		ArgMode::In => None,
		ArgMode::Out => Some(quote! { FuncParamMode::Out }),
		ArgMode::InOut => Some(quote! { FuncParamMode::InOut }),
		ArgMode::Variadic => Some(quote! { FuncParamMode::Variadic }),
		ArgMode::Table => Some(quote! { FuncParamMode::Table }),
	}
}
