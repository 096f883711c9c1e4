//! Formats generated modules and writes them to disk
//!
//! A destination file is either left as it was or replaced with the complete new text, never truncated halfway.

use super::{
	ast_convert::format_rust,
	error::{Error, Result},
};
use proc_macro2::TokenStream;
use std::{
	fs,
	io::Write,
	path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::info;

/// Formats `tokens` and writes them to `path`, `target` names the schema or extension in errors
pub fn write_module(path: &Path, target: &str, tokens: syn::Result<TokenStream>) -> Result<PathBuf> {
	let format_err = |source| Error::Format {
		target: target.to_string(),
		source,
	};
	let text = format_rust(tokens.map_err(format_err)?).map_err(format_err)?;
	write_atomic(path, text.as_bytes())?;
	info!(target_name = target, path = %path.display(), "wrote generated module");
	Ok(path.to_path_buf())
}

/// Writes `contents` to a temporary file beside `path` and renames it into place
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
	let write_err = |source| Error::Write {
		path: path.to_path_buf(),
		source,
	};
	let dir = match path.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};
	fs::create_dir_all(dir).map_err(write_err)?;

	let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
	tmp.write_all(contents).map_err(write_err)?;
	tmp.as_file().sync_all().map_err(write_err)?;
	#[cfg(unix)]
	{
		use std::os::unix::fs::PermissionsExt;
		fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o644)).map_err(write_err)?;
	}
	tmp.persist(path).map_err(|e| write_err(e.error))?;
	Ok(())
}
