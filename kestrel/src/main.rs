mod config;

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use config::Config;
use kestrel_core::{
    Album, AlbumSearchStore, LoadOutcome, QueryParams, RequestStatus, SortOrder, SubsonicCatalog,
    ToastSink,
};
use serde::Serialize;

/// Search and sort the albums on an OpenSubsonic server, printing the result as JSON.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the config file.
    #[arg(long, default_value = Config::FILENAME)]
    config: PathBuf,
    /// A URL query string such as `query=blue&order=desc`. Overrides the config file.
    #[arg(long)]
    params: Option<String>,
    /// Only show albums whose title or artist contains this text. Overrides `--params`.
    #[arg(short, long)]
    query: Option<String>,
    /// Sort by title: `asc` or `desc`. Overrides `--params`.
    #[arg(short, long)]
    order: Option<SortOrder>,
    /// Write the JSON here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}
impl Args {
    /// Config defaults, then `--params`, then the individual flags.
    fn query_params(&self, config: &Config) -> QueryParams {
        let mut params = match &self.params {
            Some(query_string) => QueryParams::parse(query_string),
            None => config.search.params(),
        };
        if let Some(query) = &self.query {
            params.query = query.clone();
        }
        if let Some(order) = self.order {
            params.order = order;
        }
        params
    }
}

#[derive(Serialize)]
struct Output<'a> {
    params: String,
    status: RequestStatus,
    total_count: usize,
    albums: &'a [Album],
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kestrel=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let params = args.query_params(&config);
    tracing::debug!("starting with {params}");

    let catalog = SubsonicCatalog::connect(
        config.server.base_url.clone(),
        config.server.username.clone(),
        config.server.password.clone(),
    );
    let (toasts, toast_rx) = ToastSink::new(config.notifications.toast_duration());
    let store = Arc::new(AlbumSearchStore::new(
        Arc::new(catalog),
        Arc::new(toasts),
        params,
    ));

    let outcome = store
        .initialize()
        .await
        .context("album fetch task panicked")?;
    for toast in toast_rx.try_iter() {
        eprintln!("{} [{}]", toast.message, toast.action);
    }

    let albums = store.displayed_albums();
    let output = Output {
        params: store.query_params().to_query_string(),
        status: store.status(),
        total_count: store.total_count(),
        albums: &albums,
    };
    let json = serde_json::to_string_pretty(&output)?;
    match &args.output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(match outcome {
        LoadOutcome::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
