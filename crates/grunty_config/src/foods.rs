//! Food catalog.

use grunty_search::{Inventory, Resource, Slot, TraitVector};
use indexmap::IndexMap;

use crate::error::ConfigError;

/// Ordered catalog of every food a pantry can hold.
///
/// The catalog order is the pantry's slot order, and therefore the order in
/// which the search branches.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: IndexMap<String, Resource>,
}

impl FoodCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The sixteen foods the game ships with.
    #[must_use]
    pub fn builtin() -> Self {
        const FOODS: [(&str, u32, [i32; 5]); 16] = [
            ("golden_egg", 2, [0, 0, 0, 0, 0]),
            ("grunt_mints", 1, [0, 4, -4, -2, -1]),
            ("twilight_onion", 1, [4, 3, -3, 0, 1]),
            ("snaky_cactus", 1, [1, 5, -2, -1, 2]),
            ("oh_no_melon", 1, [3, 1, -1, 1, 0]),
            ("cordyceps", 1, [2, 2, 0, 2, 4]),
            ("white_cherry", 1, [-1, 0, 1, 3, 5]),
            ("root_vegetable", 1, [-2, -1, 2, 0, 3]),
            ("la_pumpkin", 1, [-3, -2, 3, 5, 0]),
            ("mushroom", 1, [-4, -3, 0, -3, -3]),
            ("mandragora", 1, [5, 0, 4, -4, -4]),
            ("piney_apple", 1, [0, -4, 5, 4, -2]),
            ("immature_egg", 2, [-3, -1, 3, 2, 1]),
            ("bear_cat_egg", 2, [-1, -3, 1, 2, 3]),
            ("invisible_egg", 2, [3, 1, 0, -1, -3]),
            ("bloody_egg", 2, [1, 3, 0, -3, -1]),
        ];

        let mut catalog = Self::new();
        for (name, weight, delta) in FOODS {
            catalog.register(name, Resource::new(weight, TraitVector::from_array(delta)));
        }
        catalog
    }

    /// Adds a food at the end of the catalog, replacing any food of the same name in place.
    pub fn register(&mut self, name: impl Into<String>, resource: Resource) {
        self.foods.insert(name.into(), resource);
    }

    /// Looks up a food by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Resource> {
        self.foods.get(name).copied()
    }

    /// Food names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    /// Number of foods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Returns `true` if the catalog has no foods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Builds a fresh pantry holding `counts[name]` units of every food.
    ///
    /// Names in `counts` that are not in the catalog are logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFood`] for the first catalog food that
    /// `counts` does not mention. A missing count is never treated as zero.
    pub fn stock(&self, counts: &IndexMap<String, u32>) -> Result<Inventory, ConfigError> {
        for name in counts.keys().filter(|name| !self.foods.contains_key(*name)) {
            tracing::warn!(food = %name, "ignoring count for unknown food");
        }

        let slots = self
            .foods
            .iter()
            .map(|(name, &resource)| {
                let total = *counts
                    .get(name)
                    .ok_or_else(|| ConfigError::MissingFood(name.clone()))?;
                Ok(Slot::new(name.as_str(), total, resource))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Inventory::new(slots)?)
    }
}
