//! Core types and traits for the MicroUrl shortener.
//!
//! This crate provides the identifier and secret types, the base62 codec
//! that maps one onto the other, the stored [`UrlRecord`], and the traits
//! shared by the generator, storage and service crates.

pub mod base62;
pub mod codec;
pub mod error;
pub mod id;
pub mod repository;
pub mod shortener;

pub use base62::Secret;
pub use codec::ShortCodec;
pub use error::{CoreError, GeneratorError, ShortenerError, StorageError};
pub use id::UrlId;
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortener::Shortener;
