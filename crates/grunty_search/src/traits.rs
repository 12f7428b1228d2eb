//! Five-axis trait vectors.
//!
//! A [`TraitVector`] is the atomic value type of the search: every food
//! carries one as its delta, and every grunty accumulates one as it eats.

use core::fmt;
use core::ops::{Add, AddAssign, Index, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// One of the five named trait axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Body odor.
    Odor,
    /// Rebelliousness.
    Rebellion,
    /// Brutality.
    Brutality,
    /// Intelligence.
    Intelligence,
    /// Purity.
    Purity,
}

impl Axis {
    /// All axes, in vector order.
    pub const ALL: [Axis; 5] = [
        Axis::Odor,
        Axis::Rebellion,
        Axis::Brutality,
        Axis::Intelligence,
        Axis::Purity,
    ];

    /// Position of this axis inside a [`TraitVector`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase axis name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Axis::Odor => "odor",
            Axis::Rebellion => "rebellion",
            Axis::Brutality => "brutality",
            Axis::Intelligence => "intelligence",
            Axis::Purity => "purity",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-arity additive vector over the five [`Axis`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitVector([i32; 5]);

impl TraitVector {
    /// The zero vector.
    pub const ZERO: TraitVector = TraitVector([0; 5]);

    /// Creates a vector from its five components, in axis order.
    #[must_use]
    pub const fn new(
        odor: i32,
        rebellion: i32,
        brutality: i32,
        intelligence: i32,
        purity: i32,
    ) -> Self {
        Self([odor, rebellion, brutality, intelligence, purity])
    }

    /// Creates a vector from an array in axis order.
    #[must_use]
    pub const fn from_array(values: [i32; 5]) -> Self {
        Self(values)
    }

    /// Creates a vector with every axis set to `value`.
    #[must_use]
    pub const fn splat(value: i32) -> Self {
        Self([value; 5])
    }

    /// Returns the components in axis order.
    #[must_use]
    pub const fn to_array(self) -> [i32; 5] {
        self.0
    }

    /// Returns the component for one axis.
    #[must_use]
    pub fn get(self, axis: Axis) -> i32 {
        self.0[axis.index()]
    }

    /// Iterates `(axis, value)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, i32)> + '_ {
        Axis::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Axis> for TraitVector {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        &self.0[axis.index()]
    }
}

impl Add for TraitVector {
    type Output = TraitVector;

    fn add(mut self, rhs: TraitVector) -> TraitVector {
        self += rhs;
        self
    }
}

impl AddAssign for TraitVector {
    fn add_assign(&mut self, rhs: TraitVector) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl Sub for TraitVector {
    type Output = TraitVector;

    fn sub(mut self, rhs: TraitVector) -> TraitVector {
        self -= rhs;
        self
    }
}

impl SubAssign for TraitVector {
    fn sub_assign(&mut self, rhs: TraitVector) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs -= rhs;
        }
    }
}

impl fmt::Display for TraitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "({a}, {b}, {c}, {d}, {e})")
    }
}
