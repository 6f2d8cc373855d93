use crate::error::{Error, Result};
use crate::types::{SignatureScheme, WaitFor};
use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_NODE_URL: &str = "ws://127.0.0.1:9943";
pub const DEFAULT_ACCOUNT_SEED: &str = "//Alice";
const DEFAULT_LOG_DIR: &str = "logs";

/// Connection and signing settings for one submission.
#[derive(Clone, Debug)]
pub struct SubmitterConfig {
    pub node_url: String,
    pub account_seed: String,
    pub scheme: SignatureScheme,
    pub wait_for: WaitFor,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            account_seed: DEFAULT_ACCOUNT_SEED.to_string(),
            scheme: SignatureScheme::default(),
            wait_for: WaitFor::default(),
        }
    }
}

/// Loads `.env` (if any) and resolves the directory the log file is written to.
///
/// An explicitly passed directory wins over `SUBMITTER_LOG_DIR`.
pub fn run_config(log_dir: Option<PathBuf>) -> PathBuf {
    dotenv::dotenv().ok();

    log_dir
        .or_else(|| env::var("SUBMITTER_LOG_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
}

/// Checks that `node_url` is a WebSocket endpoint before any connection is attempted.
pub fn parse_node_url(node_url: &str) -> Result<Url> {
    let url = Url::parse(node_url)?;

    match url.scheme() {
        "ws" | "wss" => {}
        other => {
            return Err(Error::invalid_node_url(
                node_url,
                format!("unsupported scheme `{other}`, expected ws or wss"),
            ))
        }
    }

    if url.host_str().is_none() {
        return Err(Error::invalid_node_url(node_url, "missing host"));
    }

    Ok(url)
}
