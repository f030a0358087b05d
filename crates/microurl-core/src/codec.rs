use crate::base62::{self, Secret};
use crate::error::Result;
use crate::id::UrlId;
use smol_str::SmolStr;

pub const DEFAULT_BASE_URL: &str = "https://micro.url";

/// Converts between identifiers and full short URLs.
///
/// A short URL is the configured base URL followed by `/` and the base62
/// secret of the identifier, e.g. `https://micro.url/b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortCodec {
    base_url: SmolStr,
}

impl ShortCodec {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: SmolStr::new(base_url.as_ref().trim_end_matches('/')),
        }
    }

    /// Returns the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn encode(&self, id: UrlId) -> Secret {
        Secret::encode(id)
    }

    pub fn decode(&self, secret: &str) -> Result<UrlId> {
        base62::decode(secret)
    }

    /// Builds the full short URL for an identifier.
    pub fn short_url(&self, id: UrlId) -> String {
        format!("{}/{}", self.base_url, self.encode(id))
    }

    /// Returns the trailing path segment of a short URL.
    ///
    /// Input without any `/` is returned whole.
    pub fn extract_secret(short_url: &str) -> &str {
        match short_url.rfind('/') {
            Some(idx) => &short_url[idx + 1..],
            None => short_url,
        }
    }

    /// Extracts and decodes the secret of a short URL.
    ///
    /// Only the trailing segment is inspected; the host is not checked
    /// against the configured base URL.
    pub fn parse(&self, short_url: &str) -> Result<UrlId> {
        self.decode(Self::extract_secret(short_url))
    }
}

impl Default for ShortCodec {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn short_url_uses_base_url() {
        let codec = ShortCodec::default();
        assert_eq!(codec.short_url(UrlId::new(1)), "https://micro.url/b");
        assert_eq!(codec.short_url(UrlId::new(62)), "https://micro.url/ba");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let codec = ShortCodec::new("https://s.example/");
        assert_eq!(codec.base_url(), "https://s.example");
        assert_eq!(codec.short_url(UrlId::new(0)), "https://s.example/a");
    }

    #[test]
    fn extract_secret_takes_last_segment() {
        assert_eq!(ShortCodec::extract_secret("https://micro.url/abc"), "abc");
        assert_eq!(ShortCodec::extract_secret("https://micro.url/x/y"), "y");
        assert_eq!(ShortCodec::extract_secret("https://micro.url/"), "");
    }

    #[test]
    fn extract_secret_without_slash_returns_input() {
        assert_eq!(
            ShortCodec::extract_secret("not-a-url-at-all"),
            "not-a-url-at-all"
        );
        assert_eq!(ShortCodec::extract_secret(""), "");
    }

    #[test]
    fn parse_round_trips_short_url() {
        let codec = ShortCodec::default();
        let id = UrlId::new(987_654_321);
        assert_eq!(codec.parse(&codec.short_url(id)), Ok(id));
    }

    #[test]
    fn parse_ignores_host() {
        let codec = ShortCodec::default();
        assert_eq!(codec.parse("http://elsewhere.test/ba"), Ok(UrlId::new(62)));
        assert_eq!(codec.parse("ba"), Ok(UrlId::new(62)));
    }

    #[test]
    fn parse_reports_malformed_secret() {
        let codec = ShortCodec::default();
        assert_eq!(codec.parse("https://micro.url/"), Err(CoreError::EmptySecret));
        assert!(matches!(
            codec.parse("https://micro.url/a.b"),
            Err(CoreError::InvalidCharacter { character: '.', .. })
        ));
    }
}
