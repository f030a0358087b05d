use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The integer key under which a URL record is stored.
///
/// Identifiers are issued by an `IdGenerator` and are in bijection with
/// their base62 [`Secret`](crate::Secret).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlId(u64);

impl UrlId {
    pub const MAX: UrlId = UrlId(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UrlId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UrlId> for u64 {
    fn from(value: UrlId) -> Self {
        value.0
    }
}

impl Display for UrlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
