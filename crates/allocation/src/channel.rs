//! Sales channel record.

use serde::{Deserialize, Serialize};

use stockflow_core::{ChannelId, Entity};

/// A sales channel participating in allocation.
///
/// Fields are public on purpose: the owning application reads and writes
/// `ideal`/`internal` directly, and [`rebalance_weights`](crate::rebalance_weights)
/// adjusts `weight` in place on whatever slice the caller hands it.
///
/// `weight` is a percentage-style share. Channel weights are not required to
/// sum to 100 across a list and are never normalized automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub weight: f64,
    /// Target quantity this channel should hold, as last computed.
    pub ideal: i64,
    /// Live internal stock the channel currently holds.
    pub internal: i64,
}

impl Channel {
    pub fn new(id: impl Into<ChannelId>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            ideal: 0,
            internal: 0,
        }
    }
}

impl Entity for Channel {
    type Id = ChannelId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_channel_starts_with_zero_stock_figures() {
        let ch = Channel::new("web", 40.0);
        assert_eq!(ch.id.as_str(), "web");
        assert_eq!(ch.weight, 40.0);
        assert_eq!(ch.ideal, 0);
        assert_eq!(ch.internal, 0);
    }

    #[test]
    fn entity_identity_is_the_channel_id() {
        let ch = Channel::new("store", 25.0);
        assert_eq!(Entity::id(&ch), &ch.id);
    }
}
