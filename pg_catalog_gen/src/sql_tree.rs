//! Normalized records passed between the pipeline stages

pub use pg_catalog_gen_core::FuncParamMode as ArgMode;
use std::path::PathBuf;

/// A function signature with cleaned type spellings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proc {
	pub name: String,
	pub args: Vec<Arg>,
	pub return_type: String,
	/// names of the input arguments that have defaults, in argument order; empty strings for unnamed ones
	pub default_names: Vec<String>,
}

impl Proc {
	pub fn arg_types(&self) -> impl Iterator<Item = &str> {
		self.args.iter().map(|a| a.type_name.as_str())
	}

	pub fn arg_names(&self) -> impl Iterator<Item = &str> {
		self.args.iter().map(|a| a.name.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
	/// empty for unnamed arguments
	pub name: String,
	pub type_name: String,
	pub has_default: bool,
	pub mode: ArgMode,
}

/// A table or view and its columns in ordinal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
	pub catalog: String,
	pub schema: String,
	pub name: String,
	pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
	pub name: String,
	pub type_name: String,
	pub is_array: bool,
	pub is_not_null: bool,
	pub length: Option<i32>,
}

/// A built-in schema and where its generated module goes
#[derive(Debug, Clone, Copy)]
pub struct SchemaToLoad {
	pub name: &'static str,
	pub gen_fn_name: &'static str,
	pub file_name: &'static str,
}

pub const BUILTIN_SCHEMAS: [SchemaToLoad; 2] = [
	SchemaToLoad {
		name: "pg_catalog",
		gen_fn_name: "genPGCatalog",
		file_name: "pg_catalog.rs",
	},
	SchemaToLoad {
		name: "information_schema",
		gen_fn_name: "genInformationSchema",
		file_name: "information_schema.rs",
	},
];

/// An extension that produced a generated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionEntry {
	/// the name the extension is created with, and the dispatch key
	pub name: String,
	/// UpperCamel generated function name, `uuid-ossp` becomes `UuidOssp`
	pub func_name: String,
	/// module under `contrib/`, `uuid-ossp` becomes `uuid_ossp`
	pub module: String,
}

/// What a generator run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
	pub generated: Vec<ExtensionEntry>,
	pub skipped_empty: Vec<String>,
	pub disabled: Vec<String>,
	pub files: Vec<PathBuf>,
}
