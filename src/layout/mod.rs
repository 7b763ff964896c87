//! Layout engine for computing item positions and resolving visible windows.
//!
//! This module handles:
//! - Pre-computing cumulative item positions from an axis size spec
//! - Binary search for the item nearest a pixel offset
//! - Resolving the inclusive index window a scrolled viewport must render
//! - Viewport state (scroll position, pixel size)

mod axis_layout;
mod viewport;
mod window;

pub use axis_layout::{AxisLayout, Bias};
pub use viewport::Viewport;
pub use window::{resolve_window, VisibleRange, WindowResolver};
