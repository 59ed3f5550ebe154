//! # Timestamp Value Object
//!
//! UTC instant used for record creation and update times.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC instant, serialized as RFC 3339.
///
/// # Examples
///
/// ```
/// use shipping_quote::domain::value_objects::Timestamp;
///
/// let created = Timestamp::from_secs(1704067200).unwrap();
/// assert!(created.to_string().starts_with("2024-01-01"));
/// assert!(Timestamp::now().is_after(&created));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds, `None` if out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns true if this instant is strictly after `other`.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns the underlying `DateTime`.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_secs_epoch() {
        let ts = Timestamp::from_secs(0).unwrap();
        assert_eq!(ts.as_datetime().timestamp(), 0);
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_secs(1_000).unwrap();
        let later = Timestamp::from_secs(2_000).unwrap();
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
        assert!(earlier < later);
    }

    #[test]
    fn serde_is_rfc3339_string() {
        let ts = Timestamp::from_secs(1704067200).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-01T00:00:00Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
