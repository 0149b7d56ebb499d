// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data points, cached bounds, and conversion from raw numeric buffers.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::CurveError;

/// A single `(x, y)` sample in data space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DataPoint {
    /// X coordinate in data space.
    pub x: f64,
    /// Y coordinate in data space.
    pub y: f64,
}

impl DataPoint {
    /// Creates a new data point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to a Kurbo point (still in data space).
    #[inline]
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for DataPoint {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for DataPoint {
    #[inline]
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Axis-aligned bounds of a curve's data, in data space.
///
/// Empty data yields all-zero bounds. NaN coordinates are skipped by the
/// min/max folds unless every value on an axis is NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DataBounds {
    /// Smallest x value.
    pub x_min: f64,
    /// Largest x value.
    pub x_max: f64,
    /// Smallest y value.
    pub y_min: f64,
    /// Largest y value.
    pub y_max: f64,
}

impl DataBounds {
    /// Computes the bounds of `points`.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };
        rest.iter().fold(
            Self {
                x_min: first.x,
                x_max: first.x,
                y_min: first.y,
                y_max: first.y,
            },
            |b, p| Self {
                x_min: b.x_min.min(p.x),
                x_max: b.x_max.max(p.x),
                y_min: b.y_min.min(p.y),
                y_max: b.y_max.max(p.y),
            },
        )
    }

    /// Returns the bounds as a Kurbo rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }
}

/// Zips x and y sequences into points, rejecting mismatched lengths.
pub(crate) fn zip_columns(xs: &[f64], ys: &[f64]) -> Result<Vec<DataPoint>, CurveError> {
    if xs.len() != ys.len() {
        return Err(CurveError::LengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| DataPoint { x, y })
        .collect())
}

/// Reads two columns of a row-major `rows x columns` buffer as points.
pub(crate) fn points_from_table(
    buffer: &[f64],
    rows: usize,
    columns: usize,
    x_column: usize,
    y_column: usize,
) -> Result<Vec<DataPoint>, CurveError> {
    let shape_error = CurveError::TableShape {
        rows,
        columns,
        len: buffer.len(),
    };
    if rows.checked_mul(columns) != Some(buffer.len()) {
        return Err(shape_error);
    }
    for column in [x_column, y_column] {
        if column >= columns {
            return Err(CurveError::ColumnOutOfRange { column, columns });
        }
    }
    if rows == 0 {
        return Ok(Vec::new());
    }
    Ok(buffer
        .chunks_exact(columns)
        .map(|row| DataPoint {
            x: row[x_column],
            y: row[y_column],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_are_zero() {
        assert_eq!(DataBounds::from_points(&[]), DataBounds::default());
    }

    #[test]
    fn bounds_track_min_and_max_independently() {
        let pts = [
            DataPoint::new(3.0, -1.0),
            DataPoint::new(-2.0, 5.0),
            DataPoint::new(0.5, 0.0),
        ];
        let b = DataBounds::from_points(&pts);
        assert_eq!(b.x_min, -2.0);
        assert_eq!(b.x_max, 3.0);
        assert_eq!(b.y_min, -1.0);
        assert_eq!(b.y_max, 5.0);
        assert_eq!(b.to_rect(), Rect::new(-2.0, -1.0, 3.0, 5.0));
    }

    #[test]
    fn bounds_skip_nan() {
        let pts = [DataPoint::new(f64::NAN, 1.0), DataPoint::new(2.0, 3.0)];
        let b = DataBounds::from_points(&pts);
        assert_eq!(b.x_min, 2.0);
        assert_eq!(b.x_max, 2.0);
    }

    #[test]
    fn zip_rejects_mismatch() {
        assert_eq!(
            zip_columns(&[1.0, 2.0], &[1.0]),
            Err(CurveError::LengthMismatch { x_len: 2, y_len: 1 })
        );
    }

    #[test]
    fn table_reads_selected_columns() {
        // 3 rows x 3 columns: (a, x, y)
        let buffer = [9.0, 0.0, 1.0, 9.0, 2.0, 3.0, 9.0, 4.0, 5.0];
        let pts = points_from_table(&buffer, 3, 3, 1, 2).unwrap();
        assert_eq!(
            pts,
            [
                DataPoint::new(0.0, 1.0),
                DataPoint::new(2.0, 3.0),
                DataPoint::new(4.0, 5.0)
            ]
        );
    }

    #[test]
    fn table_rejects_wrong_size_and_columns() {
        assert_eq!(
            points_from_table(&[1.0, 2.0, 3.0], 2, 2, 0, 1),
            Err(CurveError::TableShape {
                rows: 2,
                columns: 2,
                len: 3
            })
        );
        assert_eq!(
            points_from_table(&[1.0, 2.0], 1, 2, 0, 2),
            Err(CurveError::ColumnOutOfRange {
                column: 2,
                columns: 2
            })
        );
        assert!(matches!(
            points_from_table(&[], usize::MAX, 2, 0, 1),
            Err(CurveError::TableShape { .. })
        ));
    }

    #[test]
    fn table_with_zero_rows_is_empty() {
        assert_eq!(points_from_table(&[], 0, 2, 0, 1), Ok(Vec::new()));
    }
}
