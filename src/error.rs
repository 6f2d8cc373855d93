use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while connecting to a node, deriving the signer, or submitting a schedule.
#[derive(Debug, Display, From)]
pub enum Error {
    #[display("{_0}")]
    Custom(String),

    #[display("invalid node url `{url}`: {reason}")]
    #[from(ignore)]
    InvalidNodeUrl { url: String, reason: String },

    /// The endpoint was unreachable or the handshake failed.
    #[display("failed to connect to {url}: {source}")]
    #[from(ignore)]
    Connection { url: String, source: subxt::Error },

    /// The node rejected the extrinsic or the status watch broke.
    #[display("submission failed: {_0}")]
    #[from(ignore)]
    Submission(subxt::Error),

    #[display("{_0}")]
    Subxt(subxt::Error),

    #[display("{_0}")]
    Io(std::io::Error),

    #[display("{_0}")]
    Json(serde_json::Error),

    #[display("{_0}")]
    Hex(hex::FromHexError),

    #[display("{_0}")]
    Url(url::ParseError),

    #[display("invalid secret uri: {_0}")]
    SecretUri(subxt_signer::SecretUriError),

    #[display("keypair derivation failed: {_0}")]
    Keypair(subxt_signer::sr25519::Error),

    /// The log directory or file could not be created.
    #[display("failed to initialize logging: {_0}")]
    LogInit(tracing_appender::rolling::InitError),
}

impl std::error::Error for Error {}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Custom(message.to_string())
    }
}

impl Error {
    pub fn connection(url: &str, source: subxt::Error) -> Self {
        Error::Connection {
            url: url.to_string(),
            source,
        }
    }

    pub fn invalid_node_url(url: &str, reason: impl Into<String>) -> Self {
        Error::InvalidNodeUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn node_url_not_set() -> Self {
        "No node URL provided. Please specify a node URL to connect.".into()
    }
}
