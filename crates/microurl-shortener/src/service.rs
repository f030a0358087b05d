use crate::settings::ServiceSettings;
use async_trait::async_trait;
use microurl_core::{Repository, ShortCodec, Shortener, ShortenerError, UrlId, UrlRecord};
use microurl_generator::{IdGenerator, SeqGenerator};
use microurl_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

type Result<T> = std::result::Result<T, ShortenerError>;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and an `IdGenerator` to handle:
/// - Identifier generation and short URL assembly
/// - Click counting on resolution
/// - Read-only statistics
///
/// Every `shorten` call mints a fresh identifier, even for a URL that was
/// shortened before; duplicates are not detected.
///
/// The `IdGenerator` is responsible for uniqueness. No collision retry is
/// performed: a generator that returns a live identifier gets
/// `ShortenerError::IdCollision` and the stored record is left alone.
#[derive(Debug)]
pub struct MicroUrlService<R = InMemoryRepository, G = SeqGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    codec: ShortCodec,
}

impl<R, G> Clone for MicroUrlService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            codec: self.codec.clone(),
        }
    }
}

impl MicroUrlService {
    /// Creates an in-memory service using the sequential generator.
    pub fn new() -> Self {
        Self::with_generator(SeqGenerator::new())
    }
}

impl Default for MicroUrlService {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> MicroUrlService<InMemoryRepository, G> {
    /// Creates an in-memory service with an injected generator.
    pub fn with_generator(generator: G) -> Self {
        Self::with_parts(
            InMemoryRepository::new(),
            generator,
            ServiceSettings::default(),
        )
    }
}

impl<R: Repository, G: IdGenerator> MicroUrlService<R, G> {
    pub fn with_parts(repository: R, generator: G, settings: ServiceSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            codec: settings.codec(),
        }
    }

    pub fn codec(&self) -> &ShortCodec {
        &self.codec
    }

    /// Calls `visit` once for every stored record, in no particular order.
    ///
    /// Records are copied out of the repository first, so `visit` may call
    /// back into the service.
    pub async fn visit_urls<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&UrlRecord),
    {
        let records = self.repository.snapshot().await?;
        trace!(count = records.len(), "visiting records");
        for (_, record) in &records {
            visit(record);
        }
        Ok(())
    }

    /// Number of stored records.
    pub async fn len(&self) -> Result<usize> {
        Ok(self.repository.len().await?)
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.repository.is_empty().await?)
    }

    /// Rejects empty and all-whitespace URLs. The scheme is not checked.
    fn validate_url(url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Decodes the identifier behind a short URL.
    /// A malformed secret is reported as `None`, same as an unknown one.
    fn resolve_id(&self, short_url: &str) -> Option<UrlId> {
        match self.codec.parse(short_url) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!(short_url = %short_url, error = %e, "malformed short url");
                None
            }
        }
    }
}

#[async_trait]
impl<R: Repository, G: IdGenerator> Shortener for MicroUrlService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<String> {
        Self::validate_url(original_url)?;

        let id = self.generator.generate(original_url).map_err(|e| {
            warn!(url = %original_url, error = %e, "id generation failed");
            ShortenerError::from(e)
        })?;

        let short_url = self.codec.short_url(id);
        let record = UrlRecord::new(original_url, short_url.clone());

        self.repository
            .insert_new(id, record)
            .await
            .map_err(|e| {
                warn!(id = %id, error = %e, "failed to store record");
                ShortenerError::from(e)
            })?;

        info!(id = %id, short_url = %short_url, "shortened url");
        Ok(short_url)
    }

    async fn click_url(&self, short_url: &str) -> Result<Option<String>> {
        let Some(id) = self.resolve_id(short_url) else {
            return Ok(None);
        };

        match self.repository.find_and_increment(id).await? {
            Some(record) => {
                debug!(id = %id, clicks = record.clicks, url = %record.original_url, "clicked");
                Ok(Some(record.original_url))
            }
            None => {
                trace!(id = %id, "short url not found");
                Ok(None)
            }
        }
    }

    async fn stats(&self, short_url: &str) -> Result<Option<UrlRecord>> {
        let Some(id) = self.resolve_id(short_url) else {
            return Ok(None);
        };

        Ok(self.repository.find(id).await?)
    }
}
