// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotstory Paint: the drawing seam between plot items and a host renderer.
//!
//! Plot items such as curves keep a retained description of what they look
//! like (paths, positions, brushes, strokes). When the host wants pixels it
//! hands the item a [`Painter`], and the item replays that description as a
//! short sequence of clip, fill and stroke calls.
//!
//! The trait is deliberately small so that it can be implemented on top of
//! any 2D renderer that understands Kurbo paths and Peniko brushes.
//!
//! - [`Painter`]: the trait hosts implement.
//! - [`RecordingPainter`]: a non-rasterizing implementation that records
//!   [`PaintEvent`]s. It is meant for tests and debugging that want to assert
//!   on what an item painted and in which clip scope.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Affine, BezPath, Rect};
//! use peniko::{Brush, Color};
//! use plotstory_paint::{Painter, RecordingPainter};
//!
//! let mut painter = RecordingPainter::new();
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0));
//!
//! painter.with_clip(Rect::new(0.0, 0.0, 100.0, 100.0), |p| {
//!     p.fill(Affine::IDENTITY, &path, &Brush::Solid(Color::BLACK));
//! });
//!
//! assert_eq!(painter.events().len(), 3);
//! assert_eq!(painter.fills().count(), 1);
//! assert_eq!(painter.clip_depth(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod record;

use kurbo::{Affine, BezPath, Rect, Stroke};
use peniko::Brush;

pub use record::{PaintEvent, RecordingPainter};

/// Minimal painter trait consumed by plot items.
///
/// Transforms passed to [`Painter::fill`] and [`Painter::stroke`] map the
/// path's local coordinates into device space. Clip rectangles are always in
/// device space.
pub trait Painter {
    /// Push a rectangular clip. Everything painted until the matching
    /// [`Painter::pop_clip`] is clipped to `rect`.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the most recently pushed clip.
    fn pop_clip(&mut self);

    /// Fill `path` with `brush` (non-zero winding).
    fn fill(&mut self, transform: Affine, path: &BezPath, brush: &Brush);

    /// Stroke `path` with `style` and `brush`.
    fn stroke(&mut self, transform: Affine, path: &BezPath, style: &Stroke, brush: &Brush);

    /// Run `f` inside a clip scope, popping the clip afterwards.
    fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.push_clip(rect);
        let out = f(self);
        self.pop_clip();
        out
    }
}

impl<P: Painter + ?Sized> Painter for &mut P {
    #[inline]
    fn push_clip(&mut self, rect: Rect) {
        (**self).push_clip(rect);
    }

    #[inline]
    fn pop_clip(&mut self) {
        (**self).pop_clip();
    }

    #[inline]
    fn fill(&mut self, transform: Affine, path: &BezPath, brush: &Brush) {
        (**self).fill(transform, path, brush);
    }

    #[inline]
    fn stroke(&mut self, transform: Affine, path: &BezPath, style: &Stroke, brush: &Brush) {
        (**self).stroke(transform, path, style, brush);
    }
}
