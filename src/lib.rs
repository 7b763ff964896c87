//! stickygrid - virtualization windowing engine for large grids
//!
//! Renders huge `rows x columns` data sets by materializing only the cells
//! that intersect the current viewport (plus a configurable overscan
//! margin):
//! - Cumulative axis geometry with fixed or per-index item sizes
//! - O(log n) window resolution via a biased binary search
//! - Per-offset result caching for re-render storms
//! - One visible range per axis, reused by sticky header strips on any edge
//!
//! The engine is pure and synchronous: it consumes a scroll offset and a
//! viewport size, and produces index ranges and pixel geometry. What the
//! cells contain, and how they are drawn, is the host's business.
//!
//! # Usage
//!
//! ```
//! use stickygrid::{AxisSpec, StickyGrid, Viewport};
//!
//! let mut grid = StickyGrid::new(
//!     &AxisSpec::fixed(10_000, 50.0),
//!     &AxisSpec::fixed(200, 100.0),
//!     10,
//! );
//!
//! let mut viewport = Viewport::new();
//! viewport.resize(800.0, 600.0);
//! viewport.set_scroll(250.0, 1_000.0, grid.total_width(), grid.total_height());
//!
//! if let Some(window) = grid.window(&viewport) {
//!     for row in window.rows.iter() {
//!         for col in window.cols.iter() {
//!             let rect = grid.cell_rect(row, col);
//!             // place cell (row, col) at rect.x / rect.y
//!             let _ = rect;
//!         }
//!     }
//! }
//! ```

pub mod axis;
pub mod error;
pub mod grid;
pub mod layout;

pub use axis::{AxisSpec, SizeFn, SizeSpec};
pub use error::{GridError, Result};
pub use grid::{CellRect, GridConfig, GridWindow, StickyGrid};
pub use layout::{resolve_window, AxisLayout, Bias, Viewport, VisibleRange, WindowResolver};

/// Get the library version
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
