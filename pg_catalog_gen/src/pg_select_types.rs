//! Select statements into the system catalogs and corresponding row types
use super::try_from_row::*;
use pg_catalog_gen_derive::TryFromRow;

// shared select list for both function queries, ordered on every column so repeated runs are stable
macro_rules! proc_columns {
	() => {
		"SELECT p.proname::text AS name,
	format_type(p.prorettype, NULL) AS return_type,
	array(
		SELECT format_type(t.oid, NULL)
		FROM unnest(coalesce(p.proallargtypes, p.proargtypes::oid[])) WITH ORDINALITY AS t(oid, n)
		ORDER BY t.n
	) AS arg_types,
	p.proargnames AS arg_names,
	p.pronargdefaults::int4 AS num_defaults,
	p.proargmodes::text[] AS arg_modes
FROM pg_catalog.pg_proc p
"
	};
}

/// Every function visible in the search path that lives in schema `$1`
pub const GET_SCHEMA_PROCS: &str = concat!(
	proc_columns!(),
	"LEFT JOIN pg_catalog.pg_namespace n ON n.oid = p.pronamespace
WHERE n.nspname::text = $1
	AND pg_function_is_visible(p.oid)
ORDER BY 1, 2, 3, 4, 5"
);

/// Every visible function owned by extension `$1`
///
/// An extension owns a function when pg_depend links the function to the extension with deptype 'e'
pub const GET_EXTENSION_PROCS: &str = concat!(
	"WITH extension_funcs AS (
	SELECT p.oid
	FROM pg_catalog.pg_extension AS e
	JOIN pg_catalog.pg_depend AS d ON d.refobjid = e.oid
	JOIN pg_catalog.pg_proc AS p ON p.oid = d.objid
	WHERE d.deptype = 'e' AND e.extname::text = $1
)
",
	proc_columns!(),
	"JOIN extension_funcs ef ON ef.oid = p.oid
WHERE pg_function_is_visible(p.oid)
ORDER BY 1, 2, 3, 4, 5"
);
#[derive(Debug, Clone, TryFromRow)]
pub struct GetProcs {
	pub name: String,
	pub return_type: String,
	pub arg_types: Vec<String>,
	pub arg_names: Option<Vec<String>>,
	/// how many trailing input arguments have defaults
	pub num_defaults: i32,
	pub arg_modes: Option<Vec<String>>,
}

pub const GET_TABLES: &str = "SELECT table_schema::text, table_name::text
FROM information_schema.tables
WHERE table_schema::text = $1
	AND table_type IN ('BASE TABLE', 'VIEW')
ORDER BY table_name";
#[derive(Debug, Clone, TryFromRow)]
pub struct GetTables {
	pub schema: String,
	pub name: String,
}

pub const GET_COLUMNS: &str = "SELECT column_name::text,
	data_type::text,
	udt_name::text,
	is_nullable::text,
	character_maximum_length::int4
FROM information_schema.columns
WHERE table_schema::text = $1
	AND table_name::text = $2
ORDER BY ordinal_position";
#[derive(Debug, Clone, TryFromRow)]
pub struct GetColumns {
	pub name: String,
	pub data_type: String,
	pub udt_name: String,
	pub is_nullable: String,
	pub max_length: Option<i32>,
}

/// Quoted identifier for `CREATE EXTENSION`, which cannot take the name as a bind parameter
pub fn create_extension_sql(name: &str) -> String {
	format!("CREATE EXTENSION IF NOT EXISTS \"{}\"", name.replace('"', "\"\""))
}
