// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors returned when curve data is rejected.
///
/// A rejected call never modifies the curve: no data is replaced and no
/// pending change is recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurveError {
    /// The x and y sequences passed to [`Curve::set_data`](crate::Curve::set_data)
    /// have different lengths.
    LengthMismatch {
        /// Length of the x sequence.
        x_len: usize,
        /// Length of the y sequence.
        y_len: usize,
    },
    /// A flat table buffer does not hold exactly `rows * columns` values.
    TableShape {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        columns: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// A requested column index is not below the declared column count.
    ColumnOutOfRange {
        /// Requested column.
        column: usize,
        /// Declared number of columns.
        columns: usize,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LengthMismatch { x_len, y_len } => write!(
                f,
                "x and y data must have the same length (got {x_len} x values and {y_len} y values)"
            ),
            Self::TableShape { rows, columns, len } => write!(
                f,
                "table of {rows} rows x {columns} columns does not match buffer of {len} values"
            ),
            Self::ColumnOutOfRange { column, columns } => {
                write!(f, "column {column} is out of range for {columns} columns")
            }
        }
    }
}

impl core::error::Error for CurveError {}
