// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending change kinds and the compact set that accumulates them.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// A kind of curve mutation that has not yet been reflected in the rendered
/// items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Change {
    /// The number of data points changed.
    NumberOfItems = 0,
    /// The point size changed.
    Size = 1,
    /// The symbol kind changed.
    Symbol = 2,
    /// Data, graph transform or graph area changed, so device positions are stale.
    Position = 3,
    /// The color changed.
    Color = 4,
    /// The render mode switched between discrete markers and a continuous line.
    Continuous = 5,
}

impl Change {
    /// All change kinds, in the order a partial update consumes them.
    pub const ALL: [Self; 6] = [
        Self::NumberOfItems,
        Self::Size,
        Self::Symbol,
        Self::Position,
        Self::Color,
        Self::Continuous,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of pending [`Change`]s.
///
/// Recording the same change kind more than once is idempotent, which is how
/// several mutations coalesce into a single rebuild.
///
/// ```
/// use plotstory_curve::{Change, ChangeSet};
///
/// let mut pending = ChangeSet::EMPTY;
/// pending.insert(Change::Position);
/// pending.insert(Change::Position);
/// pending |= Change::Color;
///
/// assert_eq!(pending.len(), 2);
/// assert!(pending.contains(Change::Color));
/// assert!(pending.intersects(Change::Size | Change::Color));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ChangeSet(u8);

impl ChangeSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `change` is in the set.
    #[must_use]
    pub const fn contains(self, change: Change) -> bool {
        self.0 & change.bit() != 0
    }

    /// Returns `true` if the two sets share at least one change.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Adds `change` to the set.
    pub fn insert(&mut self, change: Change) {
        self.0 |= change.bit();
    }

    /// Removes `change` from the set.
    pub fn remove(&mut self, change: Change) {
        self.0 &= !change.bit();
    }

    /// Empties the set, returning what it held.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Number of distinct changes in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates the changes in the set in [`Change::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Change> {
        Change::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl fmt::Debug for ChangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<Change> for ChangeSet {
    fn from(change: Change) -> Self {
        Self(change.bit())
    }
}

impl BitOr for Change {
    type Output = ChangeSet;

    fn bitor(self, rhs: Self) -> ChangeSet {
        ChangeSet(self.bit() | rhs.bit())
    }
}

impl BitOr<Change> for ChangeSet {
    type Output = Self;

    fn bitor(self, rhs: Change) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOr for ChangeSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign<Change> for ChangeSet {
    fn bitor_assign(&mut self, rhs: Change) {
        self.insert(rhs);
    }
}

impl BitOrAssign for ChangeSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
