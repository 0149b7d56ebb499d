// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::Symbol;

/// Visual configuration of a curve.
///
/// ```
/// use peniko::Color;
/// use plotstory_curve::{CurveStyle, Symbol};
///
/// let style = CurveStyle::default()
///     .with_symbol(Symbol::Rect)
///     .with_point_size(8.0)
///     .with_color(Color::from_rgb8(0xd6, 0x27, 0x28));
/// assert_eq!(style.symbol, Symbol::Rect);
/// assert!(!style.continuous);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveStyle {
    /// Marker shape for discrete curves.
    pub symbol: Symbol,
    /// Marker size, or line width for continuous curves, in device units.
    pub point_size: f64,
    /// Marker fill or line color.
    pub color: Color,
    /// Draw a connected line instead of markers.
    pub continuous: bool,
}

impl CurveStyle {
    /// Default marker size.
    pub const DEFAULT_POINT_SIZE: f64 = 5.0;

    /// Sets the symbol.
    #[must_use]
    pub const fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Sets the point size.
    #[must_use]
    pub const fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    /// Sets the color.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the render mode.
    #[must_use]
    pub const fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            symbol: Symbol::Ellipse,
            point_size: Self::DEFAULT_POINT_SIZE,
            color: Color::BLACK,
            continuous: false,
        }
    }
}
