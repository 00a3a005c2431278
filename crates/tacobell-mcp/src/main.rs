use anyhow::Context as _;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tacobell_api::TacoBellClient;
use tacobell_mcp::{server::SERVER_NAME, TacoBellServer};
use tracing_subscriber::EnvFilter;

/// Serves the Taco Bell MCP tools over stdio.
///
/// Flags override the matching `TACOBELL_MCP_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "tacobell-mcp", version)]
#[command(about = "MCP server for Taco Bell store search and menus")]
struct Cli {
    /// Upstream base URL (http or https).
    #[arg(long, value_parser = tacobell_core::validate_base_url)]
    base_url: Option<String>,

    /// Per-request upstream timeout in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = tacobell_core::load_app_config()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.request_timeout_secs = timeout_secs;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    // Stdout carries protocol frames; logs must go to stderr.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let client = TacoBellClient::with_base_url(&config.base_url, config.request_timeout_secs)
        .context("building upstream client")?;

    tracing::info!(
        server = SERVER_NAME,
        base_url = %config.base_url,
        timeout_secs = config.request_timeout_secs,
        "starting MCP server on stdio"
    );

    let service = TacoBellServer::new(client)
        .serve(stdio())
        .await
        .context("MCP initialization failed")?;
    let reason = service.waiting().await?;
    tracing::info!(?reason, "MCP session ended");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_flag_accepts_http() {
        let cli = Cli::try_parse_from(["tacobell-mcp", "--base-url", "http://127.0.0.1:8080"])
            .expect("http base URL should parse");
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn base_url_flag_rejects_non_http_scheme() {
        let err = Cli::try_parse_from(["tacobell-mcp", "--base-url", "ftp://www.tacobell.com/"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn timeout_flag_rejects_zero() {
        let err = Cli::try_parse_from(["tacobell-mcp", "--timeout-secs", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
