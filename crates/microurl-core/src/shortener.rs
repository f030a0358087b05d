use crate::repository::UrlRecord;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a new record for `original_url` and returns its short URL.
    ///
    /// Every call mints a fresh identifier, so shortening the same URL twice
    /// yields two independent short URLs.
    async fn shorten(&self, original_url: &str) -> Result<String>;

    /// Resolves a short URL to its original URL, counting one click.
    /// Returns `None` if the short URL is malformed or unknown.
    async fn click_url(&self, short_url: &str) -> Result<Option<String>>;

    /// Returns the record behind a short URL without counting a click.
    /// Returns `None` if the short URL is malformed or unknown.
    async fn stats(&self, short_url: &str) -> Result<Option<UrlRecord>>;
}
