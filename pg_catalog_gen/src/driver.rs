//! Runs the generator: built-in schemas first, then every enabled extension, then the dispatch and index modules
use super::{
	ast_convert::{contrib_mod_to_rust, extension_loader_to_rust, root_mod_to_rust, schema_to_rust, CatalogModule},
	compat::{reconcile, Scope},
	connection::Introspector,
	emit::write_module,
	error::Result,
	extensions::{Extension, EXTENSIONS},
	normalize::CATALOG_NAME,
	sql_tree::*,
};
use std::path::Path;
use tracing::{debug, info, warn};

pub const CONTRIB_DIR: &str = "contrib";
pub const LOADER_FILE: &str = "extension.rs";
pub const ROOT_MOD_FILE: &str = "mod.rs";

/// Generates every module under `out_dir` using the built-in extension list
pub async fn run<I>(introspector: &mut I, out_dir: &Path) -> Result<RunReport>
where
	I: Introspector + Send,
{
	run_with(introspector, out_dir, EXTENSIONS).await
}

/// Like [`run`] with an explicit extension list
///
/// The first error ends the run. Files written before it stay on disk.
pub async fn run_with<I>(introspector: &mut I, out_dir: &Path, extensions: &[Extension]) -> Result<RunReport>
where
	I: Introspector + Send,
{
	let mut report = RunReport::default();

	for schema in BUILTIN_SCHEMAS.iter() {
		let procs = introspector.schema_procs(schema.name).await?;
		let procs = reconcile(Scope::Schema(schema.name), procs);
		let relations = introspector.relations(schema.name).await?;
		info!(
			schema = schema.name,
			functions = procs.len(),
			relations = relations.len(),
			"introspected schema"
		);
		let tokens = schema_to_rust(&CatalogModule {
			schema_name: schema.name,
			gen_fn_name: schema.gen_fn_name,
			procs: &procs,
			relations: &relations,
		});
		report.files.push(write_module(&out_dir.join(schema.file_name), schema.name, tokens)?);
	}

	let contrib_dir = out_dir.join(CONTRIB_DIR);
	for ext in extensions {
		if !ext.enabled {
			debug!(extension = ext.name, "extension disabled");
			report.disabled.push(ext.name.to_string());
			continue;
		}

		introspector.install_extension(ext.name).await?;
		let procs = introspector.extension_procs(ext.name).await?;
		if procs.is_empty() {
			warn!(extension = ext.name, "no functions found");
			report.skipped_empty.push(ext.name.to_string());
			continue;
		}

		let procs = reconcile(Scope::Extension(ext.name), procs);
		let entry = ext.entry();
		let tokens = schema_to_rust(&CatalogModule {
			schema_name: CATALOG_NAME,
			gen_fn_name: &entry.func_name,
			procs: &procs,
			relations: &[],
		});
		let path = contrib_dir.join(format!("{}.rs", entry.module));
		report.files.push(write_module(&path, ext.name, tokens)?);
		report.generated.push(entry);
	}

	report.files.push(write_module(
		&contrib_dir.join("mod.rs"),
		CONTRIB_DIR,
		contrib_mod_to_rust(&report.generated),
	)?);
	report.files.push(write_module(
		&out_dir.join(LOADER_FILE),
		LOADER_FILE,
		extension_loader_to_rust(&report.generated),
	)?);
	report.files.push(write_module(
		&out_dir.join(ROOT_MOD_FILE),
		ROOT_MOD_FILE,
		root_mod_to_rust(&BUILTIN_SCHEMAS),
	)?);

	Ok(report)
}
