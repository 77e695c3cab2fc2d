//! Development reverse proxy for the e-eye web UI.
//!
//! The backend owns a fixed set of path prefixes (`/auth`, `/users`, ...);
//! this binary forwards those to the backend origin and serves the built UI
//! bundle for everything else, so the browser sees a single origin during
//! local development. Production deployments serve UI and API from one
//! origin and do not run this.

mod config;
mod forward;

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eeye-webui-proxy", version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
    /// Point every rule at this origin instead of the built-in target.
    #[arg(long)]
    upstream: Option<String>,
    /// TOML file with `[[rules]]` entries replacing the built-in table.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory with the `trunk build` output; served for paths no rule
    /// matches. Without it, unmatched paths get 404.
    #[arg(long)]
    dist: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => config::ProxyConfig::load(path)
            .with_context(|| format!("cannot load proxy config from {}", path.display()))?,
        None => config::ProxyConfig::default(),
    };
    if let Some(upstream) = args.upstream {
        config.retarget(upstream);
    }
    for rule in &config.rules {
        tracing::info!(prefix = %rule.prefix, upstream = %rule.target, "proxy rule");
    }

    let router = forward::router(config, args.dist.as_deref());
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("cannot listen on {}", args.listen))?;
    tracing::info!("listening on http://{}", args.listen);
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
