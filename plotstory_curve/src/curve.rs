// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use peniko::{Brush, Color};
use plotstory_paint::Painter;

use crate::data::{points_from_table, zip_columns};
use crate::{
    Change, ChangeSet, CurveError, CurveStyle, DataBounds, DataPoint, ItemId, ItemLayout,
    PathItem, Symbol, symbol_path,
};

/// Counts of completed reconciliation passes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UpdateStats {
    /// Partial passes, which only touched what the pending changes named.
    pub partial: u64,
    /// Full rebuilds.
    pub full: u64,
}

impl UpdateStats {
    /// Total number of passes.
    #[must_use]
    pub const fn total(self) -> u64 {
        self.partial + self.full
    }
}

/// An incrementally updated 2D plot curve.
///
/// A curve owns its data points and the render items that show them: one
/// marker per point in discrete mode, or a single polyline in continuous
/// mode. Every setter records what kind of change it made; reconciliation
/// then does only the work those changes require.
///
/// With [auto-update](Curve::set_auto_update) on (the default) each
/// effective mutation reconciles immediately. With it off, changes
/// accumulate in [`Curve::pending`] and are applied together by the next
/// [`Curve::update_properties`], [`Curve::update_all`], or by turning
/// auto-update back on. Setting a value equal to the current one records
/// nothing.
///
/// Item lists only ever grow or shrink at the tail, so items below the
/// smaller of the old and new point counts keep their [`ItemId`]s across a
/// resize.
#[derive(Clone, Debug)]
pub struct Curve {
    data: Vec<DataPoint>,
    bounds: DataBounds,
    continuous: bool,
    symbol: Symbol,
    point_size: f64,
    color: Color,
    graph_transform: Affine,
    graph_area: Rect,
    auto_update: bool,
    pending: ChangeSet,
    layout: ItemLayout,
    // Last generated marker geometry, shared by every marker.
    symbol_path: BezPath,
    next_id: u64,
    stats: UpdateStats,
}

impl Default for Curve {
    fn default() -> Self {
        let style = CurveStyle::default();
        Self {
            data: Vec::new(),
            bounds: DataBounds::default(),
            continuous: false,
            symbol: style.symbol,
            point_size: style.point_size,
            color: style.color,
            graph_transform: Affine::IDENTITY,
            graph_area: Rect::ZERO,
            auto_update: true,
            pending: ChangeSet::EMPTY,
            layout: ItemLayout::default(),
            symbol_path: symbol_path(style.symbol, style.point_size),
            next_id: 0,
            stats: UpdateStats::default(),
        }
    }
}

impl Curve {
    /// Creates a curve from x and y sequences with the default style.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::LengthMismatch`] if the sequences differ in length.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, CurveError> {
        let mut curve = Self::default();
        curve.set_data(xs, ys)?;
        Ok(curve)
    }

    /// Creates a curve from points with the default style.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        let mut curve = Self::default();
        curve.set_points(points);
        curve
    }

    /// Creates an empty curve with the given style.
    #[must_use]
    pub fn with_style(style: CurveStyle) -> Self {
        let mut curve = Self::default();
        curve.apply_style(style);
        curve
    }

    // --- data ---

    /// Replaces the data with points zipped from `xs` and `ys`.
    ///
    /// Records [`Change::NumberOfItems`] if the point count changes and always
    /// records [`Change::Position`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::LengthMismatch`] if the sequences differ in
    /// length. The curve is left untouched.
    pub fn set_data(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), CurveError> {
        let points = zip_columns(xs, ys)?;
        self.replace_data(points);
        Ok(())
    }

    /// Replaces the data with `points`.
    pub fn set_points<I>(&mut self, points: I)
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        self.replace_data(points.into_iter().map(Into::into).collect());
    }

    /// Replaces the data with two columns of a row-major `rows x columns`
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::TableShape`] if `buffer` does not hold exactly
    /// `rows * columns` values, or [`CurveError::ColumnOutOfRange`] if either
    /// column index is not below `columns`. The curve is left untouched.
    pub fn set_data_from_table(
        &mut self,
        buffer: &[f64],
        rows: usize,
        columns: usize,
        x_column: usize,
        y_column: usize,
    ) -> Result<(), CurveError> {
        let points = points_from_table(buffer, rows, columns, x_column, y_column)?;
        self.replace_data(points);
        Ok(())
    }

    fn replace_data(&mut self, points: Vec<DataPoint>) {
        if points.len() != self.data.len() {
            self.pending.insert(Change::NumberOfItems);
        }
        self.data = points;
        self.pending.insert(Change::Position);
        self.bounds = DataBounds::from_points(&self.data);
        self.check_for_update();
    }

    /// The current data points, in render order.
    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Bounds of the current data. All zero when there is no data.
    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        self.bounds
    }

    /// Smallest x value.
    #[must_use]
    pub fn min_x_value(&self) -> f64 {
        self.bounds.x_min
    }

    /// Largest x value.
    #[must_use]
    pub fn max_x_value(&self) -> f64 {
        self.bounds.x_max
    }

    /// Smallest y value.
    #[must_use]
    pub fn min_y_value(&self) -> f64 {
        self.bounds.y_min
    }

    /// Largest y value.
    #[must_use]
    pub fn max_y_value(&self) -> f64 {
        self.bounds.y_max
    }

    // --- properties ---

    /// Returns `true` if the curve is drawn as a connected line.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Switches between markers and a connected line.
    pub fn set_continuous(&mut self, continuous: bool) {
        if continuous == self.continuous {
            return;
        }
        self.continuous = continuous;
        self.pending.insert(Change::Continuous);
        self.check_for_update();
    }

    /// Marker or line color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the marker or line color.
    pub fn set_color(&mut self, color: Color) {
        if color == self.color {
            return;
        }
        self.color = color;
        self.pending.insert(Change::Color);
        self.check_for_update();
    }

    /// Marker size, which is also the line width in continuous mode.
    #[must_use]
    pub fn point_size(&self) -> f64 {
        self.point_size
    }

    /// Sets the marker size.
    ///
    /// Sizes are compared bitwise, so setting the same NaN twice records a
    /// single change.
    pub fn set_point_size(&mut self, size: f64) {
        if size.to_bits() == self.point_size.to_bits() {
            return;
        }
        self.point_size = size;
        self.pending.insert(Change::Size);
        self.check_for_update();
    }

    /// Marker symbol.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Sets the marker symbol.
    pub fn set_symbol(&mut self, symbol: Symbol) {
        if symbol == self.symbol {
            return;
        }
        self.symbol = symbol;
        self.pending.insert(Change::Symbol);
        self.check_for_update();
    }

    /// Data-to-device transform.
    #[must_use]
    pub fn graph_transform(&self) -> Affine {
        self.graph_transform
    }

    /// Sets the data-to-device transform.
    pub fn set_graph_transform(&mut self, transform: Affine) {
        if same_bits(&transform.as_coeffs(), &self.graph_transform.as_coeffs()) {
            return;
        }
        self.graph_transform = transform;
        self.pending.insert(Change::Position);
        self.check_for_update();
    }

    /// Device-space area the curve is clipped to when painted.
    #[must_use]
    pub fn graph_area(&self) -> Rect {
        self.graph_area
    }

    /// Sets the device-space graph area.
    pub fn set_graph_area(&mut self, area: Rect) {
        if same_bits(&rect_coords(area), &rect_coords(self.graph_area)) {
            return;
        }
        self.graph_area = area;
        self.pending.insert(Change::Position);
        self.check_for_update();
    }

    /// Returns `true` if mutations reconcile immediately.
    #[must_use]
    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// Turns immediate reconciliation on or off.
    ///
    /// Turning it on applies anything that accumulated in the meantime.
    pub fn set_auto_update(&mut self, auto_update: bool) {
        self.auto_update = auto_update;
        self.check_for_update();
    }

    /// Routes every field of `style` through its setter.
    ///
    /// Only fields that differ are recorded, and they are reconciled together.
    pub fn apply_style(&mut self, style: CurveStyle) {
        self.batch(|c| {
            c.set_symbol(style.symbol);
            c.set_point_size(style.point_size);
            c.set_color(style.color);
            c.set_continuous(style.continuous);
        });
    }

    /// The current settings as a [`CurveStyle`].
    #[must_use]
    pub fn style(&self) -> CurveStyle {
        CurveStyle {
            symbol: self.symbol,
            point_size: self.point_size,
            color: self.color,
            continuous: self.continuous,
        }
    }

    /// Runs `f` with auto-update suspended, then reconciles once.
    ///
    /// The auto-update setting in effect before the call is restored
    /// afterwards, even if `f` changed it.
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let auto_update = core::mem::replace(&mut self.auto_update, false);
        let out = f(self);
        self.auto_update = auto_update;
        self.check_for_update();
        out
    }

    // --- reconciliation ---

    /// Changes recorded but not yet reflected in the rendered items.
    #[must_use]
    pub fn pending(&self) -> ChangeSet {
        self.pending
    }

    /// Counts of reconciliation passes so far.
    #[must_use]
    pub fn stats(&self) -> UpdateStats {
        self.stats
    }

    /// Reconciles if auto-update is on and anything is pending.
    pub fn check_for_update(&mut self) {
        if self.auto_update && !self.pending.is_empty() {
            self.update_properties();
        }
    }

    /// Applies the pending changes, touching only what they name.
    ///
    /// Does nothing if no change is pending. Partial updates only exist for
    /// markers: a continuous curve, or any pending mode switch, goes through
    /// [`Curve::update_all`] instead. Changes are consumed in a fixed order:
    /// item count, symbol geometry, positions, color.
    pub fn update_properties(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        if self.continuous
            || self.layout.is_continuous()
            || self.pending.contains(Change::Continuous)
        {
            self.update_all();
            return;
        }
        let pending = self.pending.take();
        tracing::trace!(?pending, points = self.data.len(), "partial curve update");

        if pending.contains(Change::NumberOfItems) {
            self.sync_marker_count();
        }
        if pending.intersects(Change::Size | Change::Symbol) {
            self.symbol_path = symbol_path(self.symbol, self.point_size);
            let stroke = self.symbol.marker_stroke();
            if let ItemLayout::Discrete { markers } = &mut self.layout {
                for marker in markers {
                    marker.path.clone_from(&self.symbol_path);
                    marker.stroke.clone_from(&stroke);
                }
            }
        }
        if pending.contains(Change::Position) {
            if let ItemLayout::Discrete { markers } = &mut self.layout {
                for (marker, point) in markers.iter_mut().zip(&self.data) {
                    marker.position = self.graph_transform * point.to_point();
                }
            }
        }
        if pending.contains(Change::Color) {
            let brush = Brush::Solid(self.color);
            if let ItemLayout::Discrete { markers } = &mut self.layout {
                for marker in markers {
                    marker.brush.clone_from(&brush);
                }
            }
        }
        self.stats.partial += 1;
    }

    /// Rebuilds every rendered item from scratch and clears pending changes.
    pub fn update_all(&mut self) {
        let pending = self.pending.take();
        tracing::trace!(
            ?pending,
            points = self.data.len(),
            continuous = self.continuous,
            "full curve update"
        );

        if self.layout.is_continuous() != self.continuous {
            self.switch_layout();
        }

        if self.continuous {
            let path = polyline(self.graph_transform, &self.data);
            if let ItemLayout::Continuous { line } = &mut self.layout {
                line.path = path;
                line.position = Point::ORIGIN;
                line.brush = Brush::Solid(self.color);
                line.stroke = Some(Stroke::new(self.point_size));
            }
        } else {
            self.sync_marker_count();
            self.symbol_path = symbol_path(self.symbol, self.point_size);
            let stroke = self.symbol.marker_stroke();
            let brush = Brush::Solid(self.color);
            if let ItemLayout::Discrete { markers } = &mut self.layout {
                for (marker, point) in markers.iter_mut().zip(&self.data) {
                    marker.path.clone_from(&self.symbol_path);
                    marker.stroke.clone_from(&stroke);
                    marker.position = self.graph_transform * point.to_point();
                    marker.brush.clone_from(&brush);
                }
            }
        }
        self.stats.full += 1;
    }

    fn switch_layout(&mut self) {
        // The old items go away before the new structure is allocated.
        self.layout = ItemLayout::default();
        if self.continuous {
            let id = self.alloc_id();
            self.layout = ItemLayout::Continuous {
                line: PathItem::new(
                    id,
                    BezPath::new(),
                    Brush::Solid(self.color),
                    Some(Stroke::new(self.point_size)),
                ),
            };
        }
    }

    /// Truncates or extends the marker list at the tail to match the data.
    fn sync_marker_count(&mut self) {
        let ItemLayout::Discrete { markers } = &mut self.layout else {
            return;
        };
        let n = self.data.len();
        if markers.len() >= n {
            markers.truncate(n);
            return;
        }
        let brush = Brush::Solid(self.color);
        let stroke = self.symbol.marker_stroke();
        markers.reserve(n - markers.len());
        for point in &self.data[markers.len()..] {
            let id = ItemId(self.next_id);
            self.next_id += 1;
            let mut marker =
                PathItem::new(id, self.symbol_path.clone(), brush.clone(), stroke.clone());
            marker.position = self.graph_transform * point.to_point();
            markers.push(marker);
        }
    }

    fn alloc_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    // --- rendered state ---

    /// The rendered structure.
    #[must_use]
    pub fn layout(&self) -> &ItemLayout {
        &self.layout
    }

    /// Marker items. Empty for a continuous curve.
    #[must_use]
    pub fn markers(&self) -> &[PathItem] {
        match &self.layout {
            ItemLayout::Discrete { markers } => markers,
            ItemLayout::Continuous { .. } => &[],
        }
    }

    /// The line item of a continuous curve.
    #[must_use]
    pub fn line(&self) -> Option<&PathItem> {
        match &self.layout {
            ItemLayout::Discrete { .. } => None,
            ItemLayout::Continuous { line } => Some(line),
        }
    }

    /// Maps a data-space point to device space.
    #[must_use]
    pub fn device_point(&self, point: DataPoint) -> Point {
        self.graph_transform * point.to_point()
    }

    /// The graph area mapped back to data space.
    ///
    /// Returns `None` if the graph transform is not invertible.
    #[must_use]
    pub fn data_rect(&self) -> Option<Rect> {
        let det = self.graph_transform.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(
            self.graph_transform
                .inverse()
                .transform_rect_bbox(self.graph_area),
        )
    }

    /// Builds a free-standing marker in the current symbol and color.
    ///
    /// The marker sits at the device position of `point` and uses `size`, or
    /// the curve's point size when `None`. It is not owned by the curve and
    /// carries [`ItemId::DETACHED`]; this is meant for legends and similar
    /// decorations.
    #[must_use]
    pub fn marker_item(&self, point: DataPoint, size: Option<f64>) -> PathItem {
        let path = symbol_path(self.symbol, size.unwrap_or(self.point_size));
        let mut marker = PathItem::new(
            ItemId::DETACHED,
            path,
            Brush::Solid(self.color),
            self.symbol.marker_stroke(),
        );
        marker.position = self.device_point(point);
        marker
    }

    /// Paints the rendered items.
    ///
    /// This paints what has been reconciled so far; pending changes are not
    /// applied. A non-empty graph area clips the drawing.
    pub fn paint<P: Painter>(&self, painter: &mut P) {
        if self.graph_area.is_zero_area() {
            self.paint_items(painter);
        } else {
            painter.with_clip(self.graph_area, |p| self.paint_items(p));
        }
    }

    fn paint_items<P: Painter + ?Sized>(&self, painter: &mut P) {
        for item in self.layout.iter() {
            item.paint(painter);
        }
    }
}

/// Bitwise equality, so a NaN setting compares equal to itself.
fn same_bits(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

fn rect_coords(r: Rect) -> [f64; 4] {
    [r.x0, r.y0, r.x1, r.y1]
}

/// Polyline through `points` in order, mapped by `transform`.
fn polyline(transform: Affine, points: &[DataPoint]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(transform * first.to_point());
    for point in rest {
        path.line_to(transform * point.to_point());
    }
    path
}
