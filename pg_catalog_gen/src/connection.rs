//! Catalog access over a single postgres connection
use super::{
	error::{Error, Result},
	pg_select_types::*,
	sql_tree::*,
	try_from_row::{SqlError, TryFromRow},
};
use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Statement};
use tracing::{debug, error};

/// Connects without TLS and drives the connection on a background task
pub async fn connect(url: &str) -> Result<CatalogClient> {
	let (client, connection) = tokio_postgres::connect(url, NoTls).await.map_err(Error::Connect)?;
	tokio::spawn(async move {
		if let Err(e) = connection.await {
			error!("connection error: {}", e);
		}
	});
	CatalogClient::new(client).await
}

/// What the driver needs from the database
#[async_trait]
pub trait Introspector {
	/// `CREATE EXTENSION IF NOT EXISTS`, succeeding when the extension is already installed
	async fn install_extension(&mut self, name: &str) -> Result<()>;
	/// Every visible function in a schema, in catalog order
	async fn schema_procs(&mut self, schema: &str) -> Result<Vec<Proc>>;
	/// Every visible function owned by an installed extension, in catalog order
	async fn extension_procs(&mut self, extension: &str) -> Result<Vec<Proc>>;
	/// Tables and views of a schema with their columns
	async fn relations(&mut self, schema: &str) -> Result<Vec<Relation>>;
}

pub struct CatalogClient {
	client: Client,
	schema_procs_stmt: Statement,
	extension_procs_stmt: Statement,
	tables_stmt: Statement,
	columns_stmt: Statement,
}

impl CatalogClient {
	/// Prepares every catalog statement up front
	pub async fn new(client: Client) -> Result<CatalogClient> {
		async fn prepare(client: &Client, name: &str, sql: &str) -> Result<Statement> {
			debug!(statement = name, "preparing");
			client.prepare(sql).await.map_err(Error::Prepare)
		}
		Ok(CatalogClient {
			schema_procs_stmt: prepare(&client, "schema_procs", GET_SCHEMA_PROCS).await?,
			extension_procs_stmt: prepare(&client, "extension_procs", GET_EXTENSION_PROCS).await?,
			tables_stmt: prepare(&client, "tables", GET_TABLES).await?,
			columns_stmt: prepare(&client, "columns", GET_COLUMNS).await?,
			client,
		})
	}

	pub fn client(&self) -> &Client {
		&self.client
	}

	async fn get_procs(&self, stmt: &Statement, target: &str) -> Result<Vec<Proc>> {
		let introspect_err = |source| Error::Introspect {
			target: target.to_string(),
			source,
		};
		let rows = self.client.query(stmt, &[&target]).await.map_err(introspect_err)?;
		rows.iter()
			.map(|row| GetProcs::from_row(row).map_err(introspect_err).and_then(Proc::from_row))
			.collect()
	}

	async fn get_tables(&self, schema: &str) -> std::result::Result<Vec<GetTables>, SqlError> {
		self.client
			.query(&self.tables_stmt, &[&schema])
			.await?
			.iter()
			.map(TryFromRow::from_row)
			.collect()
	}

	async fn get_columns(&self, schema: &str, table: &str) -> std::result::Result<Vec<GetColumns>, SqlError> {
		self.client
			.query(&self.columns_stmt, &[&schema, &table])
			.await?
			.iter()
			.map(TryFromRow::from_row)
			.collect()
	}
}

#[async_trait]
impl Introspector for CatalogClient {
	async fn install_extension(&mut self, name: &str) -> Result<()> {
		self.client
			.batch_execute(&create_extension_sql(name))
			.await
			.map_err(|source| Error::InstallExtension {
				extension: name.to_string(),
				source,
			})
	}

	async fn schema_procs(&mut self, schema: &str) -> Result<Vec<Proc>> {
		self.get_procs(&self.schema_procs_stmt, schema).await
	}

	async fn extension_procs(&mut self, extension: &str) -> Result<Vec<Proc>> {
		self.get_procs(&self.extension_procs_stmt, extension).await
	}

	async fn relations(&mut self, schema: &str) -> Result<Vec<Relation>> {
		let introspect_err = |source| Error::Introspect {
			target: schema.to_string(),
			source,
		};
		let tables = self.get_tables(schema).await.map_err(introspect_err)?;
		let mut relations = Vec::with_capacity(tables.len());
		for table in tables {
			let columns = self.get_columns(&table.schema, &table.name).await.map_err(introspect_err)?;
			relations.push(Relation::from_rows(table, columns));
		}
		Ok(relations)
	}
}
