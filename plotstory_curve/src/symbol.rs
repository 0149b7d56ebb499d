// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker symbols and their geometry.

use kurbo::{BezPath, Circle, Point, Rect, Shape, Stroke};

/// Tolerance used when flattening curved symbols into paths.
const SYMBOL_TOLERANCE: f64 = 0.1;

/// Stroke width used for outline-only symbols such as [`Symbol::Cross`].
const OUTLINE_WIDTH: f64 = 1.0;

/// `sin(60deg)`, used for the hexagon vertices.
const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Marker shape drawn for each point of a discrete curve.
///
/// Every shape is centered on the origin and fits a `size x size` box; the
/// curve translates it to the point's device position. Y grows downwards, so
/// [`Symbol::Triangle`] points up on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Symbol {
    /// No marker. Renders an empty path on purpose.
    NoSymbol,
    /// Circle of diameter `size`.
    #[default]
    Ellipse,
    /// Square of side `size`.
    Rect,
    /// Square rotated by 45 degrees.
    Diamond,
    /// Triangle pointing up.
    Triangle,
    /// Triangle pointing down.
    DTriangle,
    /// Triangle pointing left.
    LTriangle,
    /// Triangle pointing right.
    RTriangle,
    /// Upright cross (`+`), stroked.
    Cross,
    /// Diagonal cross (`x`), stroked.
    XCross,
    /// Horizontal line, stroked.
    HLine,
    /// Vertical line, stroked.
    VLine,
    /// Regular hexagon with a vertex on the x axis.
    Hexagon,
    /// A symbol code with no geometry. Renders empty and logs a warning.
    Unsupported(UnsupportedCode),
}

/// A symbol code that has no geometry.
///
/// Only [`Symbol::from_code`] creates these, so the wrapped code never names
/// a drawable symbol and `Symbol::from_code(symbol.code()) == symbol` holds
/// for every symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnsupportedCode(i32);

impl UnsupportedCode {
    /// The raw code.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Symbol {
    /// Maps a numeric symbol code to a symbol.
    ///
    /// Codes follow the common plotting-toolkit numbering (`-1` none,
    /// `0` ellipse, `1` rect, `2` diamond, `3`/`5` up triangle, `4` down,
    /// `6` left, `7` right, `8` cross, `9` x-cross, `10` h-line, `11` v-line,
    /// `14` hexagon). Anything else becomes [`Symbol::Unsupported`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::NoSymbol,
            0 => Self::Ellipse,
            1 => Self::Rect,
            2 => Self::Diamond,
            3 | 5 => Self::Triangle,
            4 => Self::DTriangle,
            6 => Self::LTriangle,
            7 => Self::RTriangle,
            8 => Self::Cross,
            9 => Self::XCross,
            10 => Self::HLine,
            11 => Self::VLine,
            14 => Self::Hexagon,
            other => Self::Unsupported(UnsupportedCode(other)),
        }
    }

    /// Returns the numeric code of this symbol.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NoSymbol => -1,
            Self::Ellipse => 0,
            Self::Rect => 1,
            Self::Diamond => 2,
            Self::Triangle => 3,
            Self::DTriangle => 4,
            Self::LTriangle => 6,
            Self::RTriangle => 7,
            Self::Cross => 8,
            Self::XCross => 9,
            Self::HLine => 10,
            Self::VLine => 11,
            Self::Hexagon => 14,
            Self::Unsupported(code) => code.get(),
        }
    }

    /// Returns `true` for symbols made of open line segments.
    ///
    /// These have no interior, so markers using them are stroked instead of
    /// filled.
    #[must_use]
    pub const fn is_outline(self) -> bool {
        matches!(self, Self::Cross | Self::XCross | Self::HLine | Self::VLine)
    }

    /// Stroke applied to markers of this symbol, if it is drawn as an outline.
    #[must_use]
    pub fn marker_stroke(self) -> Option<Stroke> {
        self.is_outline().then(|| Stroke::new(OUTLINE_WIDTH))
    }
}

/// Builds the marker path for `symbol` at `size`, centered on the origin.
///
/// Sizes that are not strictly positive (including NaN) produce an empty
/// path. [`Symbol::Unsupported`] also produces an empty path and logs a
/// warning; it is never fatal.
#[must_use]
pub fn symbol_path(symbol: Symbol, size: f64) -> BezPath {
    if size.is_nan() || size <= 0.0 {
        return BezPath::new();
    }
    let d = 0.5 * size;
    match symbol {
        Symbol::NoSymbol => BezPath::new(),
        Symbol::Ellipse => Circle::new(Point::ORIGIN, d).to_path(SYMBOL_TOLERANCE),
        Symbol::Rect => Rect::new(-d, -d, d, d).to_path(SYMBOL_TOLERANCE),
        Symbol::Diamond => polygon(&[(0.0, -d), (d, 0.0), (0.0, d), (-d, 0.0)]),
        Symbol::Triangle => polygon(&[(0.0, -d), (d, d), (-d, d)]),
        Symbol::DTriangle => polygon(&[(0.0, d), (-d, -d), (d, -d)]),
        Symbol::LTriangle => polygon(&[(-d, 0.0), (d, -d), (d, d)]),
        Symbol::RTriangle => polygon(&[(d, 0.0), (-d, d), (-d, -d)]),
        Symbol::Cross => segments(&[((-d, 0.0), (d, 0.0)), ((0.0, -d), (0.0, d))]),
        Symbol::XCross => segments(&[((-d, -d), (d, d)), ((-d, d), (d, -d))]),
        Symbol::HLine => segments(&[((-d, 0.0), (d, 0.0))]),
        Symbol::VLine => segments(&[((0.0, -d), (0.0, d))]),
        Symbol::Hexagon => {
            let h = d * SIN_60;
            let half = 0.5 * d;
            polygon(&[
                (d, 0.0),
                (half, h),
                (-half, h),
                (-d, 0.0),
                (-half, -h),
                (half, -h),
            ])
        }
        Symbol::Unsupported(code) => {
            tracing::warn!(code = code.get(), "unsupported symbol, drawing an empty marker");
            BezPath::new()
        }
    }
}

fn polygon(vertices: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = vertices.split_first() else {
        return path;
    };
    path.move_to(first);
    for &v in rest {
        path.line_to(v);
    }
    path.close_path();
    path
}

fn segments(lines: &[((f64, f64), (f64, f64))]) -> BezPath {
    let mut path = BezPath::new();
    for &(from, to) in lines {
        path.move_to(from);
        path.line_to(to);
    }
    path
}
