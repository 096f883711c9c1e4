#![forbid(unsafe_code)]
//! Catalog types constructed by code generated with `pg_catalog_gen`
//!
//! The generator introspects a live PostgreSQL instance once and writes Rust modules whose only job is to build
//! [`Schema`] values out of literals. An analysis engine links those modules in and never needs a database
//! connection to learn function signatures or table layouts.
//!
//! [`ExtensionRegistry`] is the runtime half of the generated `extension.rs` dispatch table.
//!
//! [`Schema`]: ./struct.Schema.html
//! [`ExtensionRegistry`]: ./struct.ExtensionRegistry.html

// generated modules name this crate by path, which must also resolve when they are placed inside it
extern crate self as pg_catalog_gen_core;

mod registry;
pub use registry::{ExtensionRegistry, SchemaFn};

#[cfg(test)]
mod fixture;

/// A database schema with the functions and tables it contains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
	pub name: String,
	pub funcs: Vec<Function>,
	pub tables: Vec<Table>,
}

impl Schema {
	pub fn new(name: impl Into<String>) -> Schema {
		Schema {
			name: name.into(),
			funcs: Vec::new(),
			tables: Vec::new(),
		}
	}

	/// All overloads of a function in the order they were generated
	///
	/// Overload resolution downstream is positional, so the first match wins when several signatures fit
	pub fn funcs_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Function> + 'a {
		self.funcs.iter().filter(move |f| f.name == name)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
	pub name: String,
	pub args: Vec<Argument>,
	pub return_type: TypeName,
}

impl Function {
	pub fn arg_types(&self) -> impl Iterator<Item = &str> {
		self.args.iter().map(|a| a.type_name.name.as_str())
	}
}

/// One function parameter. Every field but the type has a meaningful default so generated code can leave it out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
	pub name: String,
	pub type_name: TypeName,
	pub has_default: bool,
	pub mode: FuncParamMode,
}

/// pg_proc.proargmodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FuncParamMode {
	/// i
	#[default]
	In,
	/// o
	Out,
	/// b
	InOut,
	/// v
	Variadic,
	/// t
	Table,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeName {
	pub name: String,
}

impl TypeName {
	pub fn new(name: impl Into<String>) -> TypeName {
		TypeName { name: name.into() }
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
	pub rel: TableName,
	pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TableName {
	pub catalog: String,
	pub schema: String,
	pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
	pub name: String,
	pub type_name: TypeName,
	pub is_not_null: bool,
	pub is_array: bool,
	/// character_maximum_length, only set for length limited character types
	pub length: Option<i32>,
}
