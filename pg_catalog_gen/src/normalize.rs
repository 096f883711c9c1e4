//! Turns raw catalog rows into [`Proc`] and [`Relation`] records
//!
//! [`Proc`]: ../sql_tree/struct.Proc.html
//! [`Relation`]: ../sql_tree/struct.Relation.html

use super::{
	error::{Error, Result},
	pg_select_types::*,
	sql_tree::*,
};

/// Catalog name written into every relation's identity
pub const CATALOG_NAME: &str = "pg_catalog";

/// Canonical spelling of a type as reported by `format_type`
///
/// Postgres quotes a few pseudo-type names that collide with keywords; the analysis engine expects them bare.
pub fn clean(typ: &str) -> String {
	typ.trim()
		.replace("\"any\"", "any")
		.replace("\"char\"", "char")
		.replace("\"timestamp\"", "timestamp")
}

fn arg_mode(code: &str) -> Option<ArgMode> {
	match code {
		"i" => Some(ArgMode::In),
		"o" => Some(ArgMode::Out),
		"b" => Some(ArgMode::InOut),
		"v" => Some(ArgMode::Variadic),
		"t" => Some(ArgMode::Table),
		_ => None,
	}
}

/// Modes counted by `pronargs` and `pronargdefaults`
fn is_input(mode: ArgMode) -> bool {
	matches!(mode, ArgMode::In | ArgMode::InOut | ArgMode::Variadic)
}

impl Proc {
	pub fn from_row(row: GetProcs) -> Result<Proc> {
		let GetProcs {
			name,
			return_type,
			arg_types,
			arg_names,
			num_defaults,
			arg_modes,
		} = row;
		let mut arg_names = arg_names.unwrap_or_default();
		let modes = arg_modes.unwrap_or_default();

		// names cover the same positions as types; pad so the two never drift apart
		arg_names.resize(arg_types.len(), String::new());

		let mut args = arg_types
			.iter()
			.zip(arg_names)
			.enumerate()
			.map(|(i, (typ, arg_name))| -> Result<Arg> {
				let mode = match modes.get(i) {
					None => ArgMode::In,
					Some(code) => arg_mode(code).ok_or_else(|| Error::UnknownArgMode {
						function: name.clone(),
						mode: code.clone(),
					})?,
				};
				Ok(Arg {
					name: arg_name,
					type_name: clean(typ),
					has_default: false,
					mode,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		// defaults belong to the last input arguments; OUT and TABLE columns may be interleaved with them
		let num_defaults = usize::try_from(num_defaults).unwrap_or(0);
		let mut default_names = Vec::with_capacity(num_defaults);
		for arg in args.iter_mut().rev().filter(|a| is_input(a.mode)).take(num_defaults) {
			arg.has_default = true;
			default_names.push(arg.name.clone());
		}
		default_names.reverse();

		Ok(Proc {
			return_type: clean(&return_type),
			name,
			args,
			default_names,
		})
	}
}

impl Column {
	pub fn from_row(row: GetColumns) -> Column {
		let (type_name, is_array) = match row.data_type.as_str() {
			"ARRAY" => (clean(row.udt_name.trim_start_matches('_')), true),
			"USER-DEFINED" => (clean(&row.udt_name), false),
			other => (clean(other), false),
		};
		Column {
			name: row.name,
			type_name,
			is_array,
			is_not_null: row.is_nullable == "NO",
			length: row.max_length,
		}
	}
}

impl Relation {
	pub fn from_rows(table: GetTables, columns: Vec<GetColumns>) -> Relation {
		Relation {
			catalog: CATALOG_NAME.to_string(),
			schema: table.schema,
			name: table.name,
			columns: columns.into_iter().map(Column::from_row).collect(),
		}
	}
}
