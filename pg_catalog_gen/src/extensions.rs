//! The contrib extensions the generator knows about
//!
//! Membership and the `enabled` flag are data. Disabled entries ship with Postgres but either need server
//! configuration to load or expose nothing useful to query analysis.

use super::sql_tree::ExtensionEntry;
use heck::ToUpperCamelCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extension {
	pub name: &'static str,
	pub enabled: bool,
}

const fn on(name: &'static str) -> Extension {
	Extension { name, enabled: true }
}

const fn off(name: &'static str) -> Extension {
	Extension { name, enabled: false }
}

pub const EXTENSIONS: &[Extension] = &[
	on("adminpack"),
	on("amcheck"),
	off("auth_delay"),
	off("auto_explain"),
	off("bloom"),
	on("btree_gin"),
	on("btree_gist"),
	on("citext"),
	on("cube"),
	on("dblink"),
	off("dict_int"),
	off("dict_xsyn"),
	on("earthdistance"),
	on("file_fdw"),
	on("fuzzystrmatch"),
	on("hstore"),
	on("intagg"),
	on("intarray"),
	on("isn"),
	on("lo"),
	on("ltree"),
	on("pageinspect"),
	off("passwordcheck"),
	on("pg_buffercache"),
	on("pg_freespacemap"),
	on("pg_prewarm"),
	on("pg_stat_statements"),
	on("pg_trgm"),
	on("pg_visibility"),
	on("pgcrypto"),
	on("pgrowlocks"),
	on("pgstattuple"),
	on("postgres_fdw"),
	on("seg"),
	off("sepgsql"),
	off("spi"),
	on("sslinfo"),
	on("tablefunc"),
	on("tcn"),
	off("test_decoding"),
	off("tsm_system_rows"),
	off("tsm_system_time"),
	on("unaccent"),
	on("uuid-ossp"),
	on("xml2"),
];

impl Extension {
	/// `uuid-ossp` becomes `UuidOssp`
	pub fn func_name(&self) -> String {
		self.name
			.replace('-', "_")
			.split('_')
			.map(|part| part.to_upper_camel_case())
			.collect()
	}

	/// Module and file stem under `contrib/`
	pub fn module(&self) -> String {
		self.name.replace('-', "_")
	}

	pub fn entry(&self) -> ExtensionEntry {
		ExtensionEntry {
			name: self.name.to_string(),
			func_name: self.func_name(),
			module: self.module(),
		}
	}
}
