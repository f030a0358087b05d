use microurl_core::codec::DEFAULT_BASE_URL;
use microurl_core::ShortCodec;
use typed_builder::TypedBuilder;

/// Configures a [`MicroUrlService`](crate::MicroUrlService) instance.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ServiceSettings {
    /// Prefix of every short URL; a trailing `/` is ignored.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
}

impl ServiceSettings {
    pub fn codec(&self) -> ShortCodec {
        ShortCodec::new(&self.base_url)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_micro_url() {
        let settings = ServiceSettings::default();
        assert_eq!(settings.base_url, "https://micro.url");
        assert_eq!(settings.codec().base_url(), "https://micro.url");
    }

    #[test]
    fn custom_base_url() {
        let settings = ServiceSettings::builder().base_url("http://localhost:8080/").build();
        assert_eq!(settings.codec().base_url(), "http://localhost:8080");
    }
}
