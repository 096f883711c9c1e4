//! Error type shared by every stage of the generator
//!
//! Nothing is retried. Each variant carries enough context (schema, extension or path) for an operator to fix the
//! underlying condition and run the generator again.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Failed to connect to database: {0}")]
	Connect(#[source] tokio_postgres::Error),

	#[error("Failed to prepare catalog query: {0}")]
	Prepare(#[source] tokio_postgres::Error),

	#[error("Error creating extension {extension}: {source}")]
	InstallExtension {
		extension: String,
		#[source]
		source: tokio_postgres::Error,
	},

	#[error("Error introspecting {target}: {source}")]
	Introspect {
		target: String,
		#[source]
		source: tokio_postgres::Error,
	},

	#[error("Function {function} has unknown argument mode '{mode}'")]
	UnknownArgMode { function: String, mode: String },

	#[error("Error formatting generated code for {target}: {source}")]
	Format {
		target: String,
		#[source]
		source: syn::Error,
	},

	#[error("Error writing {}: {source}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Interrupted")]
	Interrupted,
}

pub type Result<T> = std::result::Result<T, Error>;
