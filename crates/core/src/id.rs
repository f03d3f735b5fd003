//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a sales channel.
///
/// Channel ids are caller-supplied stable strings (e.g. `"web"`, `"store"`).
/// They double as the deterministic sort/tie-break key during remainder
/// distribution, so `Ord` follows lexicographic string order. Uniqueness
/// within a channel list is the caller's obligation; duplicates make
/// remainder distribution undefined.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Create an identifier from a trusted string.
    ///
    /// Prefer `FromStr` for untrusted input; it rejects empty ids.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ChannelId> for String {
    fn from(value: ChannelId) -> Self {
        value.0
    }
}

impl FromStr for ChannelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ChannelId: cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_ids_order_lexicographically() {
        let mut ids = vec![ChannelId::new("b"), ChannelId::new("a"), ChannelId::new("c")];
        ids.sort();
        let ordered: Vec<&str> = ids.iter().map(ChannelId::as_str).collect();
        assert_eq!(ordered, vec!["a", "b", "c"]);
    }

    #[test]
    fn parsing_rejects_empty_ids() {
        let err = "   ".parse::<ChannelId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn parsing_trims_surrounding_whitespace() {
        let id: ChannelId = " web ".parse().unwrap();
        assert_eq!(id.as_str(), "web");
    }
}
