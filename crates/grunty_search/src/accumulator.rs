//! The grunty being fed.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::inventory::Resource;
use crate::traits::TraitVector;

/// Total weight and accumulated traits of the entity under construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accumulator {
    /// Sum of the weights of everything eaten.
    pub total_weight: u32,
    /// Sum of the trait deltas of everything eaten.
    pub traits: TraitVector,
}

impl Accumulator {
    /// A grunty that has eaten nothing.
    pub const EMPTY: Accumulator = Accumulator {
        total_weight: 0,
        traits: TraitVector::ZERO,
    };

    /// Returns the state after eating `resource`.
    ///
    /// Weight saturates at `u32::MAX`, which is past any size threshold.
    #[must_use]
    pub fn apply(self, resource: Resource) -> Accumulator {
        Accumulator {
            total_weight: self.total_weight.saturating_add(resource.weight),
            traits: self.traits + resource.delta,
        }
    }

    /// Returns `true` once the weight has reached `threshold`.
    #[must_use]
    pub fn reached(self, threshold: u32) -> bool {
        self.total_weight >= threshold
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weight={} traits={}", self.total_weight, self.traits)
    }
}
