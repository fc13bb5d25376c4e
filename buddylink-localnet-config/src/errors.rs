use std::path::PathBuf;

use solana_pubkey::Pubkey;
use thiserror::Error;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to resolve ledger directory under '{path}': {source}")]
    LedgerDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL '{url}' uses '{scheme}', expected http or https")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("URL '{0}' has no port and its scheme has no known default")]
    MissingPort(String),

    #[error("Account label '{0}' is used more than once")]
    DuplicateAccountLabel(String),

    #[error("Account {0} is listed more than once")]
    DuplicateAccountId(Pubkey),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
