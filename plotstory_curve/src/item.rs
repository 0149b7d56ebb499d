// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render items owned by a curve.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point, Stroke};
use peniko::Brush;
use plotstory_paint::Painter;

/// Identifier of a render item.
///
/// Ids are issued by the owning curve from a counter that only grows, so an
/// id is never reused by the same curve. Comparing ids before and after an
/// update tells whether an item survived or was replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    /// Id carried by items that no curve owns, such as
    /// [legend markers](crate::Curve::marker_item). A curve never issues it
    /// to its own items.
    pub const DETACHED: Self = Self(u64::MAX);
}

/// A positioned path with paint, the unit a curve renders with.
///
/// The path is in item-local coordinates and is drawn translated to
/// [`PathItem::position`]. When [`PathItem::stroke`] is set the path is
/// stroked with the brush, otherwise it is filled.
#[derive(Clone, Debug, PartialEq)]
pub struct PathItem {
    id: ItemId,
    pub(crate) path: BezPath,
    pub(crate) position: Point,
    pub(crate) brush: Brush,
    pub(crate) stroke: Option<Stroke>,
}

impl PathItem {
    pub(crate) fn new(id: ItemId, path: BezPath, brush: Brush, stroke: Option<Stroke>) -> Self {
        Self {
            id,
            path,
            position: Point::ORIGIN,
            brush,
            stroke,
        }
    }

    /// Identifier of this item.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Geometry in item-local coordinates.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Device-space position the path is translated to.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Fill or stroke brush.
    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Stroke style, if the item is stroked rather than filled.
    #[must_use]
    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    /// Paints this item. Empty paths are skipped.
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P) {
        if self.path.is_empty() {
            return;
        }
        let transform = Affine::translate(self.position.to_vec2());
        match &self.stroke {
            Some(style) => painter.stroke(transform, &self.path, style, &self.brush),
            None => painter.fill(transform, &self.path, &self.brush),
        }
    }
}

/// The rendered structure of a curve.
///
/// A discrete curve owns one marker per data point; a continuous curve owns a
/// single line item. Switching modes drops the old structure before the new
/// one is built.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemLayout {
    /// One marker item per point, in data order.
    Discrete {
        /// Marker items.
        markers: Vec<PathItem>,
    },
    /// One polyline through every point.
    Continuous {
        /// The line item.
        line: PathItem,
    },
}

impl ItemLayout {
    /// Returns `true` for the continuous layout.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous { .. })
    }

    /// Number of owned items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Discrete { markers } => markers.len(),
            Self::Continuous { .. } => 1,
        }
    }

    /// Returns `true` if no items are owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates all owned items.
    pub fn iter(&self) -> impl Iterator<Item = &PathItem> + '_ {
        let (markers, line) = match self {
            Self::Discrete { markers } => (markers.as_slice(), None),
            Self::Continuous { line } => (&[][..], Some(line)),
        };
        markers.iter().chain(line)
    }
}

impl Default for ItemLayout {
    fn default() -> Self {
        Self::Discrete {
            markers: Vec::new(),
        }
    }
}
