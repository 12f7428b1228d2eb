//! Foods and the pantry they are eaten from.
//!
//! An [`Inventory`] is an immutable, ordered snapshot of named [`Slot`]s.
//! Consuming from a slot never mutates the snapshot; it returns a new one, so
//! sibling search branches can keep sharing the parent value.

use std::sync::Arc;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::traits::TraitVector;

/// Errors raised while assembling an [`Inventory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// Two slots share a name.
    #[error("duplicate slot name: {0}")]
    DuplicateSlot(String),

    /// A slot's resource has zero weight, which would let the search recurse forever.
    #[error("resource '{0}' has zero weight")]
    ZeroWeight(String),
}

/// One consumable food type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Weight added to the eater.
    pub weight: u32,
    /// Trait change applied to the eater.
    pub delta: TraitVector,
}

impl Resource {
    /// Creates a resource.
    #[must_use]
    pub const fn new(weight: u32, delta: TraitVector) -> Self {
        Self { weight, delta }
    }
}

/// A named pantry entry tracking available versus consumed units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    name: Arc<str>,
    total: u32,
    consumed: u32,
    resource: Resource,
}

impl Slot {
    /// Creates a slot with nothing consumed.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, total: u32, resource: Resource) -> Self {
        Self {
            name: name.into(),
            total,
            consumed: 0,
            resource,
        }
    }

    /// Slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units available at the start of the search.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Units consumed so far.
    #[must_use]
    pub fn consumed(&self) -> u32 {
        self.consumed
    }

    /// Units still available.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total - self.consumed
    }

    /// Returns `true` while at least one unit is left.
    #[must_use]
    pub fn has_stock(&self) -> bool {
        self.consumed < self.total
    }

    /// The food held by this slot.
    #[must_use]
    pub fn resource(&self) -> Resource {
        self.resource
    }
}

/// Immutable ordered collection of uniquely named slots.
///
/// Equality and hashing cover every slot, so two inventories reached through
/// different consumption orders compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inventory {
    slots: Arc<[Slot]>,
}

impl Inventory {
    /// Builds an inventory, validating slot names and weights.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::DuplicateSlot`] if two slots share a name, or
    /// [`InventoryError::ZeroWeight`] if a resource weighs nothing.
    pub fn new(slots: impl IntoIterator<Item = Slot>) -> Result<Self, InventoryError> {
        let slots: Vec<Slot> = slots.into_iter().collect();

        {
            let mut seen = HashSet::with_capacity(slots.len());
            for slot in &slots {
                if !seen.insert(slot.name()) {
                    return Err(InventoryError::DuplicateSlot(slot.name().to_string()));
                }
                if slot.resource.weight == 0 {
                    return Err(InventoryError::ZeroWeight(slot.name().to_string()));
                }
            }
        }

        Ok(Self {
            slots: slots.into(),
        })
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in iteration order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Looks up a slot by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }

    /// Position of the named slot.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name() == name)
    }

    /// Returns a copy with one more unit of the named slot consumed.
    ///
    /// Returns `None` if the slot does not exist or is exhausted.
    #[must_use]
    pub fn consume(&self, name: &str) -> Option<Inventory> {
        self.consume_at(self.position(name)?)
    }

    /// Returns a copy with one more unit of the slot at `index` consumed.
    ///
    /// Returns `None` if the index is out of bounds or the slot is exhausted.
    #[must_use]
    pub fn consume_at(&self, index: usize) -> Option<Inventory> {
        if !self.slots.get(index)?.has_stock() {
            return None;
        }

        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let mut slot = slot.clone();
                if i == index {
                    slot.consumed += 1;
                }
                slot
            })
            .collect();

        Some(Self { slots })
    }

    /// Ordered `(name, consumed)` pairs.
    pub fn consumption(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.slots.iter().map(|slot| (slot.name(), slot.consumed))
    }

    /// Total units consumed across all slots.
    #[must_use]
    pub fn total_consumed(&self) -> u32 {
        self.slots.iter().map(Slot::consumed).sum()
    }

    /// Units left across all slots.
    ///
    /// Widened to `u64` since per-slot stock may each approach `u32::MAX`.
    #[must_use]
    pub fn remaining_units(&self) -> u64 {
        self.slots
            .iter()
            .map(|slot| u64::from(slot.remaining()))
            .sum()
    }

    /// Lightest resource among slots that still have stock.
    #[must_use]
    pub fn lightest_stocked(&self) -> Option<u32> {
        self.slots
            .iter()
            .filter(|slot| slot.has_stock())
            .map(|slot| slot.resource.weight)
            .min()
    }
}
