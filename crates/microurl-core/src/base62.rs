use crate::error::{CoreError, Result};
use crate::id::UrlId;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// Digit alphabet; the value of a digit is its index.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest canonical secret: the encoding of `u64::MAX`.
const MAX_LEN: usize = 11;

/// A short alphanumeric token in bijection with a [`UrlId`].
///
/// A `Secret` is always canonical: it can only be built by encoding an
/// identifier or by successfully decoding a string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Secret(SmolStr);

impl Secret {
    /// Encodes an identifier as a base62 secret, most significant digit first.
    ///
    /// Zero encodes as the single zero digit `"a"`.
    pub fn encode(id: UrlId) -> Self {
        let mut value = id.get();
        let mut digits = [0_u8; MAX_LEN];
        let mut start = MAX_LEN;

        loop {
            start -= 1;
            digits[start] = ALPHABET[(value % BASE) as usize];
            value /= BASE;
            if value == 0 {
                break;
            }
        }

        // every byte comes from the ASCII alphabet
        let encoded: String = digits[start..].iter().map(|&b| b as char).collect();
        Self(SmolStr::new(encoded))
    }

    /// Parses and validates a secret, returning it together with its identifier.
    pub fn parse(secret: &str) -> Result<(Self, UrlId)> {
        let id = decode(secret)?;
        Ok((Self(SmolStr::new(secret)), id))
    }

    /// Returns the secret as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decodes a base62 secret back into its identifier.
///
/// Fails on the empty string, on characters outside [`ALPHABET`], on
/// non-canonical input (a leading zero digit), and on values that do not
/// fit in a `u64`.
pub fn decode(secret: &str) -> Result<UrlId> {
    if secret.is_empty() {
        return Err(CoreError::EmptySecret);
    }

    let mut value: u64 = 0;
    for character in secret.chars() {
        let digit = digit_value(character).ok_or_else(|| CoreError::InvalidCharacter {
            secret: secret.to_owned(),
            character,
        })?;

        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| CoreError::Overflow(secret.to_owned()))?;
    }

    if secret.len() > 1 && secret.as_bytes()[0] == ALPHABET[0] {
        return Err(CoreError::NonCanonical(secret.to_owned()));
    }

    Ok(UrlId::new(value))
}

fn digit_value(c: char) -> Option<u64> {
    let value = match c {
        'a'..='z' => c as u64 - 'a' as u64,
        'A'..='Z' => c as u64 - 'A' as u64 + 26,
        '0'..='9' => c as u64 - '0' as u64 + 52,
        _ => return None,
    };
    Some(value)
}

impl From<UrlId> for Secret {
    fn from(id: UrlId) -> Self {
        Secret::encode(id)
    }
}

impl TryFrom<&str> for Secret {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self> {
        Secret::parse(value).map(|(secret, _)| secret)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Secret").field(&self.0).finish()
    }
}

impl Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Secret::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
