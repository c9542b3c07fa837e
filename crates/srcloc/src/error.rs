use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocError {
    #[error("{path} does not end with suffix {suffix:?}")]
    SuffixNotFound { path: String, suffix: String },

    #[error("Builtins have no path")]
    NoPath,
}
