//! Command line options and database connection settings
//!
//! Connection settings come from the environment (a `.env` file is loaded first if one exists). `DATABASE_URL` wins
//! when set, otherwise the `PG_*` variables are composed into a URL with TLS disabled.

use super::error::{Error, Result};
use std::path::PathBuf;
use structopt::StructOpt;

pub const DEFAULT_OUTPUT_DIR: &str = "pg_catalog_gen_core/src/postgresql";

#[derive(Debug, StructOpt)]
#[structopt(name = "pg-catalog-gen", about = "Generates Rust catalog modules from a live PostgreSQL instance")]
pub struct Opt {
	/// Directory the generated modules are written to [default: pg_catalog_gen_core/src/postgresql]
	#[structopt(parse(from_os_str))]
	pub output_dir: Option<PathBuf>,
}

impl Opt {
	pub fn output_dir(&self) -> PathBuf {
		self.output_dir
			.clone()
			.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
	pub user: String,
	pub password: String,
	pub host: String,
	pub port: u16,
	pub database: String,
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			user: "postgres".to_string(),
			password: "mysecretpassword".to_string(),
			host: "127.0.0.1".to_string(),
			port: 5432,
			database: "dinotest".to_string(),
		}
	}
}

impl DatabaseConfig {
	/// Reads `PG_USER`, `PG_PASSWORD`, `PG_HOST`, `PG_PORT` and `PG_DATABASE`, defaulting each one that is unset or empty
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
		let defaults = Self::default();

		let port = match get("PG_PORT") {
			Some(p) => p
				.parse()
				.map_err(|_| Error::Config(format!("PG_PORT is not a valid port: {}", p)))?,
			None => defaults.port,
		};

		Ok(Self {
			user: get("PG_USER").unwrap_or(defaults.user),
			password: get("PG_PASSWORD").unwrap_or(defaults.password),
			host: get("PG_HOST").unwrap_or(defaults.host),
			port,
			database: get("PG_DATABASE").unwrap_or(defaults.database),
		})
	}

	pub fn to_url(&self) -> String {
		format!(
			"postgres://{}:{}@{}:{}/{}?sslmode=disable",
			urlencoding::encode(&self.user),
			urlencoding::encode(&self.password),
			self.host,
			self.port,
			self.database,
		)
	}
}

/// The connection string to use, `DATABASE_URL` taking precedence over the individual variables
pub fn database_url_from<F>(lookup: F) -> Result<String>
where
	F: Fn(&str) -> Option<String>,
{
	match lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
		Some(url) => Ok(url),
		None => Ok(DatabaseConfig::from_lookup(lookup)?.to_url()),
	}
}

/// Loads `.env` if present and resolves the connection string from the process environment
pub fn database_url() -> Result<String> {
	// a missing .env file is the normal case
	let _ = dotenvy::dotenv();
	database_url_from(|key| std::env::var(key).ok())
}
