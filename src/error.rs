use thiserror::Error;

/// Error type for cache construction.
///
/// `Get`/`Remove` misses are ordinary `Option`/bool results, not errors —
/// the only failure mode the policy layer models is a malformed capacity
/// at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache capacity must be at least 1, got {requested}")]
    InvalidCapacity { requested: usize },
}

pub type Result<T> = std::result::Result<T, CacheError>;
