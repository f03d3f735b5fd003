//! Allocation strategy selection.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockflow_core::DomainError;

/// How sales stock is distributed across channels.
///
/// A closed enum with exhaustive handling: there is no "unknown strategy"
/// state once a value exists. Unrecognized tags are rejected at the parsing
/// boundary instead of silently allocating zero everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStrategy {
    /// Every channel independently mirrors the full sellable stock.
    Mirror,
    /// Proportional split by channel weight, remainder to heaviest channels.
    Weighted,
    /// Even split, remainder to lexicographically first channel ids.
    Equal,
}

impl AllocationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationStrategy::Mirror => "mirror",
            AllocationStrategy::Weighted => "weighted",
            AllocationStrategy::Equal => "equal",
        }
    }
}

impl core::fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mirror" => Ok(AllocationStrategy::Mirror),
            "weighted" => Ok(AllocationStrategy::Weighted),
            "equal" => Ok(AllocationStrategy::Equal),
            other => Err(DomainError::validation(format!(
                "unknown allocation strategy: {other}"
            ))),
        }
    }
}
