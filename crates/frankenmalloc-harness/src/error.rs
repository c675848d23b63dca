//! Errors surfaced by harness commands.

use frankenmalloc_sizemap::SizeClassError;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("size class specification rejected: {0}")]
    SizeClass(#[from] SizeClassError),
    #[error("unknown model '{0}', expected default|large-pages|pages-256k|small-but-slow")]
    UnknownModel(String),
    #[error("alignment {0} is not a non-zero power of two")]
    InvalidAlignment(usize),
}
