use crate::id::UrlId;
use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// A secret that does not decode under the base62 codec.
///
/// Every variant means "malformed short URL". None of them says anything
/// about whether a record exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("secret is empty")]
    EmptySecret,
    #[error("invalid character {character:?} in secret '{secret}'")]
    InvalidCharacter { secret: String, character: char },
    #[error("secret is not in canonical form: '{0}'")]
    NonCanonical(String),
    #[error("secret overflows the identifier range: '{0}'")]
    Overflow(String),
}

/// Errors raised by an identifier generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// `last` is the final identifier handed out, if any ever was.
    #[error("identifier space exhausted (last issued: {last:?})")]
    Exhausted { last: Option<UrlId> },
    #[error("identifier {id} is outside the supported range 0..={max}")]
    OutOfRange { id: UrlId, max: u64 },
    #[error("invalid generator settings: {0}")]
    InvalidSettings(String),
    #[error("generator failed: {0}")]
    Failed(String),
}

/// Errors raised by a URL record repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("identifier already in use: {0}")]
    Conflict(UrlId),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced at the service boundary.
///
/// Malformed and unknown short URLs are not errors here: lookups report
/// them as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("id generation failed: {0}")]
    Generator(#[from] GeneratorError),
    #[error("generated identifier collides with a stored record: {0}")]
    IdCollision(UrlId),
    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(id) => Self::IdCollision(id),
            other => Self::Storage(other),
        }
    }
}
