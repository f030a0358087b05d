pub mod obfuscated;
pub mod seq;

use microurl_core::{GeneratorError, UrlId};
use std::sync::Arc;

pub use obfuscated::{ObfuscatedGenerator, Obfuscator};
pub use seq::SeqGenerator;

/// Trait for generating record identifiers.
///
/// Implementations are pure generators that don't interact with storage.
/// They receive the URL being shortened and may use it or ignore it.
///
/// A generator that cannot produce an identifier must return an error
/// instead of falling back to some default value.
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self, url: &str) -> Result<UrlId, GeneratorError>;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn generate(&self, url: &str) -> Result<UrlId, GeneratorError> {
        (**self).generate(url)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Arc<G> {
    fn generate(&self, url: &str) -> Result<UrlId, GeneratorError> {
        (**self).generate(url)
    }
}
