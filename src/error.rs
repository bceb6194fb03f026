use std::path::PathBuf;

/// Errors surfaced by the configuration layer and by strict parsing of
/// operator input. The query and status operations never produce these.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("unknown auction status: {0}")]
    UnknownStatus(String),

    #[error("unknown sort order: {0}")]
    UnknownSort(String),

    #[error("invalid price {value:?} for {field}")]
    InvalidPrice { field: &'static str, value: String },
}

/// Convenience type alias.
pub type MarketResult<T> = Result<T, MarketError>;
