//! URL shortener service implementation.
//!
//! This crate provides [`MicroUrlService`], which composes an identifier
//! generator, the base62 short URL codec and a record repository. Core
//! types are re-exported from `microurl_core`.

pub mod service;
pub mod settings;

pub use microurl_core::{Shortener, ShortenerError, UrlRecord};
pub use microurl_generator::IdGenerator;
pub use service::MicroUrlService;
pub use settings::ServiceSettings;
