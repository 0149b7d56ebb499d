// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotstory Curve: incrementally updated 2D plot curves.
//!
//! A [`Curve`] holds `(x, y)` points and a retained visual representation of
//! them: one symbol marker per point, or a single polyline through all of
//! them. The representation is kept consistent with the data, the style
//! (symbol, size, color), and a data-to-device [graph transform](Curve::set_graph_transform)
//! while doing as little rebuild work as possible.
//!
//! ## Pending changes
//!
//! Every setter records the [`Change`] kind it made in a [`ChangeSet`]. Setting
//! a value that is already current records nothing. Reconciliation consumes
//! the whole set at once:
//!
//! - [`Curve::update_properties`] is the partial path. For markers it only
//!   redoes the work the pending changes name (item count, symbol geometry,
//!   positions, color, in that order).
//! - [`Curve::update_all`] rebuilds everything. It is always used for
//!   continuous curves and for switching between markers and a line.
//!
//! With [auto-update](Curve::set_auto_update) on, reconciliation runs after
//! each effective mutation. Turn it off (or use [`Curve::batch`]) to coalesce
//! several mutations into a single pass.
//!
//! ## Items
//!
//! Rendered items are [`PathItem`]s owned by the curve through an
//! [`ItemLayout`]: markers in discrete mode, one line in continuous mode.
//! Marker lists only change at the tail, so surviving markers keep their
//! [`ItemId`]. Items are painted through the [`plotstory_paint::Painter`]
//! seam with [`Curve::paint`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Affine;
//! use plotstory_curve::{Curve, Symbol};
//!
//! let mut curve = Curve::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
//! curve.set_symbol(Symbol::Rect);
//! curve.set_graph_transform(Affine::scale(10.0));
//!
//! assert_eq!(curve.markers().len(), 3);
//! assert_eq!(curve.markers()[2].position(), kurbo::Point::new(20.0, 40.0));
//! assert_eq!(curve.max_y_value(), 4.0);
//!
//! curve.set_continuous(true);
//! assert!(curve.markers().is_empty());
//! assert!(curve.line().is_some());
//! ```
//!
//! Mismatched input is rejected rather than truncated:
//!
//! ```rust
//! use plotstory_curve::{Curve, CurveError};
//!
//! let err = Curve::new(&[0.0, 1.0], &[0.0]).unwrap_err();
//! assert_eq!(err, CurveError::LengthMismatch { x_len: 2, y_len: 1 });
//! ```
//!
//! ## Logging
//!
//! Unsupported symbols are reported with `tracing::warn!`. Reconciliation
//! passes emit `tracing::trace!` events naming the path taken and the changes
//! consumed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod change;
mod curve;
mod data;
mod error;
mod item;
mod style;
mod symbol;

pub use change::{Change, ChangeSet};
pub use curve::{Curve, UpdateStats};
pub use data::{DataBounds, DataPoint};
pub use error::CurveError;
pub use item::{ItemId, ItemLayout, PathItem};
pub use style::CurveStyle;
pub use symbol::{Symbol, UnsupportedCode, symbol_path};
