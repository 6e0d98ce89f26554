use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripIdError {
    #[error("trip id must not be empty")]
    Empty,
    #[error("trip id contains unsupported character {0:?}")]
    InvalidCharacter(char),
    #[error("trip id {0:?} is a relative path segment")]
    DotSegment(String),
}

/// Opaque identifier of a saved trip on the backend.
///
/// Values are checked once at the boundary (DOM attribute or JSON response) so
/// they can be interpolated into a route path without escaping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripId(String);

impl TripId {
    pub fn parse(raw: &str) -> Result<Self, TripIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TripIdError::Empty);
        }
        if let Some(invalid) = trimmed
            .chars()
            .find(|ch| ch.is_whitespace() || ch.is_control() || matches!(ch, '/' | '?' | '#'))
        {
            return Err(TripIdError::InvalidCharacter(invalid));
        }
        if trimmed.chars().all(|ch| ch == '.') {
            return Err(TripIdError::DotSegment(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for TripId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for TripId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// The backend emits integer primary keys; older payloads used strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTripId {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for TripId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawTripId::deserialize(deserializer)? {
            RawTripId::Number(value) => Ok(Self::from(value)),
            RawTripId::Text(value) => Self::parse(&value).map_err(serde::de::Error::custom),
        }
    }
}
