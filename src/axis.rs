//! Axis size specifications.
//!
//! An axis (rows or columns) is described by an item count and either a
//! single fixed size or a per-index size function. The fixed/variable
//! choice is resolved once when an `AxisLayout` is built, never re-checked
//! inside per-item loops.

use crate::error::{GridError, Result};

/// Per-index size callback. Must return a positive, finite size for every
/// index in `[0, count)`.
pub type SizeFn = Box<dyn Fn(usize) -> f32>;

/// Item sizing along one axis: every item the same size, or sized per index.
pub enum SizeSpec {
    /// Every item has the same size.
    Fixed(f32),
    /// Item sizes come from a per-index function.
    Variable(SizeFn),
}

impl SizeSpec {
    /// Size of the item at `index`.
    pub fn size(&self, index: usize) -> f32 {
        match self {
            SizeSpec::Fixed(size) => *size,
            SizeSpec::Variable(f) => f(index),
        }
    }
}

impl From<f32> for SizeSpec {
    fn from(size: f32) -> Self {
        SizeSpec::Fixed(size)
    }
}

impl std::fmt::Debug for SizeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeSpec::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            SizeSpec::Variable(_) => f.debug_tuple("Variable").field(&"..").finish(),
        }
    }
}

/// One axis of a grid: item count plus sizing.
///
/// Immutable per computation. Construct a new spec whenever the count or
/// the size semantics change, then rebuild the dependent `AxisLayout`.
#[derive(Debug)]
pub struct AxisSpec {
    count: usize,
    size: SizeSpec,
}

impl AxisSpec {
    /// Axis with `count` items, all of the same `size`.
    pub fn fixed(count: usize, size: f32) -> Self {
        Self {
            count,
            size: SizeSpec::Fixed(size),
        }
    }

    /// Axis with `count` items sized by a per-index function.
    pub fn variable(count: usize, size: impl Fn(usize) -> f32 + 'static) -> Self {
        Self {
            count,
            size: SizeSpec::Variable(Box::new(size)),
        }
    }

    /// Axis from a count and an already-constructed size spec.
    pub fn new(count: usize, size: SizeSpec) -> Self {
        Self { count, size }
    }

    /// Number of items along the axis.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Size of the item at `index`.
    pub fn size(&self, index: usize) -> f32 {
        self.size.size(index)
    }

    /// Check every item size against the positivity/finiteness contract.
    ///
    /// Intended for the configuration boundary. The layout build itself
    /// assumes validated input and only debug-asserts.
    ///
    /// # Errors
    /// Returns `GridError::Size` for the first index whose size is zero,
    /// negative, or non-finite.
    pub fn validate(&self) -> Result<()> {
        for index in 0..self.count {
            let size = self.size(index);
            if !size.is_finite() || size <= 0.0 {
                return Err(GridError::Size { index, size });
            }
        }
        Ok(())
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

    #[test]
    fn test_fixed_spec() {
        let spec = AxisSpec::fixed(5, 10.0);
        assert_eq!(spec.count(), 5);
        assert_eq!(spec.size(0), 10.0);
        assert_eq!(spec.size(4), 10.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_variable_spec() {
        let spec = AxisSpec::variable(3, |i| [10.0, 20.0, 30.0][i]);
        assert_eq!(spec.count(), 3);
        assert_eq!(spec.size(1), 20.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let spec = AxisSpec::fixed(4, 0.0);
        match spec.validate() {
            Err(GridError::Size { index, size }) => {
                assert_eq!(index, 0);
                assert_eq!(size, 0.0);
            }
            other => panic!("expected size error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_reports_offending_index() {
        let spec = AxisSpec::variable(4, |i| if i == 2 { f32::NAN } else { 10.0 });
        match spec.validate() {
            Err(GridError::Size { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected size error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_spec_validates() {
        // count == 0 is degenerate-but-valid, even with a nonsense size
        assert!(AxisSpec::fixed(0, -1.0).validate().is_ok());
    }

    #[test]
    fn test_size_spec_from_f32() {
        let spec: SizeSpec = 42.0.into();
        assert_eq!(spec.size(7), 42.0);
    }
}
