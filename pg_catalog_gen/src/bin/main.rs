use anyhow::Context;
use pg_catalog_gen::{config, connect, run, Error, Opt, RunReport};
use structopt::StructOpt;
use tokio_postgres::NoTls;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let opt = Opt::from_args();
	match generate(&opt).await {
		Ok(report) => info!(
			generated = report.generated.len(),
			empty = report.skipped_empty.len(),
			disabled = report.disabled.len(),
			files = report.files.len(),
			"done"
		),
		Err(e) => {
			error!("{:#}", e);
			std::process::exit(1);
		}
	}
}

async fn generate(opt: &Opt) -> anyhow::Result<RunReport> {
	let url = config::database_url()?;
	let out_dir = opt.output_dir();
	let mut client = connect(&url).await?;
	let cancel = client.client().cancel_token();
	info!(output_dir = %out_dir.display(), "connected");

	tokio::select! {
		report = run(&mut client, &out_dir) => {
			report.with_context(|| format!("generating into {}", out_dir.display()))
		}
		_ = tokio::signal::ctrl_c() => {
			warn!("interrupted, cancelling the running query");
			if let Err(e) = cancel.cancel_query(NoTls).await {
				warn!("failed to cancel query: {}", e);
			}
			Err(Error::Interrupted.into())
		}
	}
}
