// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording painter for tests and debugging.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Rect, Stroke};
use peniko::Brush;

use crate::Painter;

/// Event recorded by [`RecordingPainter`].
///
/// Draw events carry the clip in effect when they were issued, so tests can
/// assert on clip scoping without replaying the whole event list.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintEvent {
    /// A clip was pushed.
    PushClip {
        /// Clip rectangle in device space.
        rect: Rect,
        /// Clip depth after the push.
        depth: usize,
    },
    /// The innermost clip was popped.
    PopClip {
        /// Clip depth after the pop.
        depth: usize,
    },
    /// A path was filled.
    Fill {
        /// Local-to-device transform.
        transform: Affine,
        /// The filled path, in local coordinates.
        path: BezPath,
        /// Fill brush.
        brush: Brush,
        /// Innermost clip at the time of the fill, if any.
        clip: Option<Rect>,
    },
    /// A path was stroked.
    Stroke {
        /// Local-to-device transform.
        transform: Affine,
        /// The stroked path, in local coordinates.
        path: BezPath,
        /// Stroke style.
        style: Stroke,
        /// Stroke brush.
        brush: Brush,
        /// Innermost clip at the time of the stroke, if any.
        clip: Option<Rect>,
    },
}

/// A [`Painter`] that does not rasterize and only records what it was asked
/// to do.
///
/// Popping with no clip pushed is tolerated and recorded with depth `0`.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    events: Vec<PaintEvent>,
    clips: Vec<Rect>,
}

impl RecordingPainter {
    /// Creates an empty recording painter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded events in the order they were issued.
    #[must_use]
    pub fn events(&self) -> &[PaintEvent] {
        &self.events
    }

    /// Returns the recorded fill events.
    pub fn fills(&self) -> impl Iterator<Item = &PaintEvent> + '_ {
        self.events
            .iter()
            .filter(|e| matches!(e, PaintEvent::Fill { .. }))
    }

    /// Returns the recorded stroke events.
    pub fn strokes(&self) -> impl Iterator<Item = &PaintEvent> + '_ {
        self.events
            .iter()
            .filter(|e| matches!(e, PaintEvent::Stroke { .. }))
    }

    /// Current number of pushed clips.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clips.len()
    }

    /// Clears recorded events and the clip stack.
    pub fn clear(&mut self) {
        self.events.clear();
        self.clips.clear();
    }
}

impl Painter for RecordingPainter {
    fn push_clip(&mut self, rect: Rect) {
        self.clips.push(rect);
        self.events.push(PaintEvent::PushClip {
            rect,
            depth: self.clips.len(),
        });
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
        self.events.push(PaintEvent::PopClip {
            depth: self.clips.len(),
        });
    }

    fn fill(&mut self, transform: Affine, path: &BezPath, brush: &Brush) {
        self.events.push(PaintEvent::Fill {
            transform,
            path: path.clone(),
            brush: brush.clone(),
            clip: self.clips.last().copied(),
        });
    }

    fn stroke(&mut self, transform: Affine, path: &BezPath, style: &Stroke, brush: &Brush) {
        self.events.push(PaintEvent::Stroke {
            transform,
            path: path.clone(),
            style: style.clone(),
            brush: brush.clone(),
            clip: self.clips.last().copied(),
        });
    }
}
