//! Two-axis composition of the windowing engine.
//!
//! Rows and columns are resolved independently; the host renders the
//! Cartesian product of the two ranges and positions each cell with the
//! per-axis geometry. Sticky header strips reuse the same per-axis ranges,
//! which keeps every edge aligned with the main grid.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::AxisSpec;
use crate::error::Result;
use crate::layout::{AxisLayout, Viewport, VisibleRange, WindowResolver};

/// Default column width in pixels.
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f32 = 50.0;

/// Default overscan margin in items.
pub const DEFAULT_OVERSCAN: usize = 10;

/// Host-facing grid configuration with fixed item sizes.
///
/// Per-index size functions cannot round-trip through configuration files;
/// hosts that need them construct [`AxisSpec::variable`] and call
/// [`StickyGrid::new`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Number of rows in the grid.
    pub row_count: usize,
    /// Number of columns in the grid.
    pub column_count: usize,
    /// Height of every row in pixels.
    pub row_height: f32,
    /// Width of every column in pixels.
    pub column_width: f32,
    /// Extra items rendered beyond the strictly-visible range on each side.
    pub overscan: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_count: 0,
            column_count: 0,
            row_height: DEFAULT_ROW_HEIGHT,
            column_width: DEFAULT_COLUMN_WIDTH,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl GridConfig {
    /// Build a grid from the configuration, vetting sizes first.
    ///
    /// # Errors
    /// Returns `GridError::Size` when the row height or column width is
    /// zero, negative, or non-finite (and the corresponding count is
    /// non-zero).
    pub fn build(&self) -> Result<StickyGrid> {
        let rows = AxisSpec::fixed(self.row_count, self.row_height);
        let cols = AxisSpec::fixed(self.column_count, self.column_width);
        rows.validate()?;
        cols.validate()?;
        Ok(StickyGrid::new(&rows, &cols, self.overscan))
    }
}

/// Pixel bounds of a single cell in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width of the cell
    pub width: f32,
    /// Height of the cell
    pub height: f32,
}

/// Resolved windows for both axes of a grid.
///
/// Each field is the single per-axis range shared by the main grid and
/// every sticky strip: top/bottom strips render `cols`, left/right strips
/// render `rows`. The Cartesian product `rows x cols` is the host's to
/// enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridWindow {
    /// Row indices to render.
    pub rows: VisibleRange,
    /// Column indices to render.
    pub cols: VisibleRange,
}

/// Windowing engine for a two-dimensional grid with sticky headers.
///
/// Owns one cached [`WindowResolver`] per axis. Axis geometry is rebuilt
/// only on reconfiguration (`set_rows`/`set_columns`), never per scroll
/// event.
#[derive(Debug)]
pub struct StickyGrid {
    rows: WindowResolver,
    cols: WindowResolver,
}

impl StickyGrid {
    /// New grid from per-axis specs and an overscan margin.
    pub fn new(rows: &AxisSpec, cols: &AxisSpec, overscan: usize) -> Self {
        debug!(
            rows = rows.count(),
            cols = cols.count(),
            overscan,
            "grid windower created"
        );
        Self {
            rows: WindowResolver::new(AxisLayout::build(rows), overscan),
            cols: WindowResolver::new(AxisLayout::build(cols), overscan),
        }
    }

    /// Replace the row axis. Dependent cached windows are dropped.
    pub fn set_rows(&mut self, spec: &AxisSpec) {
        self.rows.set_layout(AxisLayout::build(spec));
    }

    /// Replace the column axis. Dependent cached windows are dropped.
    pub fn set_columns(&mut self, spec: &AxisSpec) {
        self.cols.set_layout(AxisLayout::build(spec));
    }

    /// Change the overscan margin for both axes.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.rows.set_overscan(overscan);
        self.cols.set_overscan(overscan);
    }

    /// Row-axis geometry, shared by left/right sticky strips.
    pub fn row_layout(&self) -> &AxisLayout {
        self.rows.layout()
    }

    /// Column-axis geometry, shared by top/bottom sticky strips.
    pub fn column_layout(&self) -> &AxisLayout {
        self.cols.layout()
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.layout().count()
    }

    /// Number of columns in the grid.
    pub fn column_count(&self) -> usize {
        self.cols.layout().count()
    }

    /// Total content width in pixels.
    pub fn total_width(&self) -> f32 {
        self.cols.layout().total_extent()
    }

    /// Total content height in pixels.
    pub fn total_height(&self) -> f32 {
        self.rows.layout().total_extent()
    }

    /// Pixel bounds of the cell at `(row, col)` in grid coordinates.
    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        CellRect {
            x: self.cols.layout().position(col),
            y: self.rows.layout().position(row),
            width: self.cols.layout().size(col),
            height: self.rows.layout().size(row),
        }
    }

    /// Resolve the visible window for both axes at the viewport's current
    /// scroll position.
    ///
    /// Takes `&mut self` for the per-axis query caches; a viewport resize
    /// observed here drops them. Returns `None` when either axis is empty
    /// (no cells to render).
    pub fn window(&mut self, viewport: &Viewport) -> Option<GridWindow> {
        self.rows.set_extent(viewport.height);
        self.cols.set_extent(viewport.width);
        let rows = self.rows.resolve(viewport.scroll_y)?;
        let cols = self.cols.resolve(viewport.scroll_x)?;
        Some(GridWindow { rows, cols })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn test_grid() -> StickyGrid {
        StickyGrid::new(
            &AxisSpec::fixed(100, 20.0),
            &AxisSpec::fixed(50, 80.0),
            0,
        )
    }

    #[test]
    fn test_total_extents() {
        let grid = test_grid();
        assert_eq!(grid.total_width(), 4_000.0);
        assert_eq!(grid.total_height(), 2_000.0);
        assert_eq!(grid.row_count(), 100);
        assert_eq!(grid.column_count(), 50);
    }

    #[test]
    fn test_window_at_origin() {
        let mut grid = test_grid();
        let mut viewport = Viewport::new();
        viewport.resize(800.0, 600.0);

        let window = grid.window(&viewport).unwrap();
        assert_eq!(window.rows, VisibleRange { min: 0, max: 30 });
        assert_eq!(window.cols, VisibleRange { min: 0, max: 10 });
    }

    #[test]
    fn test_window_after_scroll() {
        let mut grid = test_grid();
        let mut viewport = Viewport::new();
        viewport.resize(800.0, 600.0);
        viewport.set_scroll(400.0, 500.0, grid.total_width(), grid.total_height());

        let window = grid.window(&viewport).unwrap();
        assert_eq!(window.rows, VisibleRange { min: 25, max: 55 });
        assert_eq!(window.cols, VisibleRange { min: 5, max: 15 });
    }

    #[test]
    fn test_window_empty_axis() {
        let mut grid = StickyGrid::new(&AxisSpec::fixed(0, 20.0), &AxisSpec::fixed(50, 80.0), 0);
        assert_eq!(grid.window(&Viewport::new()), None);
    }

    #[test]
    fn test_cell_rect() {
        let grid = test_grid();
        let rect = grid.cell_rect(2, 3);
        assert_eq!(rect.x, 240.0);
        assert_eq!(rect.y, 40.0);
        assert_eq!(rect.width, 80.0);
        assert_eq!(rect.height, 20.0);
    }

    #[test]
    fn test_set_rows_resizes_content() {
        let mut grid = test_grid();
        grid.set_rows(&AxisSpec::fixed(10, 20.0));
        assert_eq!(grid.total_height(), 200.0);

        let mut viewport = Viewport::new();
        viewport.resize(800.0, 600.0);
        let window = grid.window(&viewport).unwrap();
        assert_eq!(window.rows, VisibleRange { min: 0, max: 9 });
    }

    #[test]
    fn test_config_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.column_width, DEFAULT_COLUMN_WIDTH);
        assert_eq!(config.row_height, DEFAULT_ROW_HEIGHT);
        assert_eq!(config.overscan, DEFAULT_OVERSCAN);
    }

    #[test]
    fn test_config_builds_grid() {
        let grid = GridConfig {
            row_count: 1_000,
            column_count: 26,
            ..GridConfig::default()
        }
        .build()
        .unwrap();
        assert_eq!(grid.total_height(), 50_000.0);
        assert_eq!(grid.total_width(), 2_600.0);
    }

    #[test]
    fn test_config_rejects_bad_sizes() {
        let config = GridConfig {
            row_count: 10,
            column_count: 10,
            row_height: -5.0,
            ..GridConfig::default()
        };
        assert!(config.build().is_err());
    }
}
