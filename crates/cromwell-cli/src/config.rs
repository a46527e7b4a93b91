//! Connection settings and logging setup

use anyhow::{Context, Result};
use clap::Args;
use cromwell_rest_client::CromwellClient;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Options shared by every command
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Base URL of the Cromwell server
    #[arg(long, global = true, env = "CROMWELL_URL", default_value = DEFAULT_SERVER_URL)]
    pub url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

impl ConnectionArgs {
    /// Build a client for the configured server
    pub fn client(&self) -> Result<CromwellClient> {
        let url = Url::parse(&self.url)
            .with_context(|| format!("Invalid Cromwell server URL: {}", self.url))?;
        Ok(CromwellClient::new(url))
    }
}

/// Map a level name onto a tracing level, defaulting to `WARN`
pub fn parse_level(level: &str) -> tracing::Level {
    match level {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    }
}

/// Install the global subscriber; logs go to stderr so stdout carries results.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_writer(std::io::stderr)
        .init();
}
