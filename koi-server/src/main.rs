//! # KOI proxy
//!
//! Serves the archive proxy and its diagnostics endpoints. Configuration is
//! read from flags, the environment, an optional `.env` file and an optional
//! `koi.toml`, in that order of precedence.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser};
use koi_config::{ConfigLoad, ConfigLoader};
use koi_server::{AppState, create_app};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "koi-server")]
#[command(about = "CORS-open proxy for the NASA Exoplanet Archive TAP service")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip loading `.env`
    #[arg(long)]
    no_env_file: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_server(cli.serve).await
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }
    if args.no_env_file {
        loader = loader.without_env_file();
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,koi_server=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }
    warnings.log();

    let addr = config.bind_address();
    info!(
        upstream = %config.upstream.endpoint,
        timeout_secs = config.upstream.timeout.as_secs(),
        "upstream configured"
    );

    let state = AppState::new(config).context("failed to build upstream client")?;
    let app = create_app(state);

    info!("Starting KOI proxy on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
