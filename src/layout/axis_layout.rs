//! Pre-computed cumulative geometry for one axis.
//!
//! Positions are computed once per spec change, enabling O(log n) lookups
//! when mapping a pixel offset back to an item index.

use crate::axis::AxisSpec;

/// Tie-breaking direction for [`AxisLayout::index_at`].
///
/// Both directions return the greatest index whose leading edge does not
/// pass the query point; they differ only when the point lands exactly on
/// an edge shared by several indices, where `Left` keeps the left-most
/// matching index and `Right` the right-most. The window resolver uses
/// `Left` for the viewport's leading edge and `Right` for its trailing
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// Prefer the left-most index on an exact edge hit.
    Left,
    /// Prefer the right-most index on an exact edge hit.
    Right,
}

/// Pre-computed cumulative geometry for one axis.
///
/// `positions[0]` is 0 and `positions[i]` is `positions[i-1] + sizes[i-1]`,
/// so `positions[i]` is the leading pixel edge of item `i` and the
/// sequence is non-decreasing (strictly increasing for positive sizes).
/// Immutable once built and freely shareable; rebuild from a new
/// [`AxisSpec`] whenever the count or the sizing changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLayout {
    sizes: Vec<f32>,
    positions: Vec<f32>,
}

impl AxisLayout {
    /// Build cumulative geometry from a spec in a single forward pass.
    ///
    /// Sizes returned by the spec must be positive and finite; that is the
    /// caller's contract ([`AxisSpec::validate`]), checked here only in
    /// debug builds. A count of zero yields empty sequences.
    pub fn build(spec: &AxisSpec) -> Self {
        let count = spec.count();
        let mut sizes = Vec::with_capacity(count);
        let mut positions = Vec::with_capacity(count);
        let mut edge = 0.0f32;
        for index in 0..count {
            let size = spec.size(index);
            debug_assert!(
                size.is_finite() && size > 0.0,
                "item size at index {index} out of contract: {size}"
            );
            positions.push(edge);
            sizes.push(size);
            edge += size;
        }
        Self { sizes, positions }
    }

    /// Number of items along the axis.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the axis has no items.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Leading pixel edges of every item.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Size of every item.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Leading pixel edge of the item at `index` (0 if out of range).
    pub fn position(&self, index: usize) -> f32 {
        self.positions.get(index).copied().unwrap_or(0.0)
    }

    /// Size of the item at `index` (0 if out of range).
    pub fn size(&self, index: usize) -> f32 {
        self.sizes.get(index).copied().unwrap_or(0.0)
    }

    /// Total pixel extent of the axis.
    pub fn total_extent(&self) -> f32 {
        match (self.positions.last(), self.sizes.last()) {
            (Some(position), Some(size)) => position + size,
            _ => 0.0,
        }
    }

    /// Find the item nearest `point` (binary search over positions).
    ///
    /// Returns the greatest index whose leading edge does not pass
    /// `point`, clamped to the first item when the point precedes the axis
    /// and to the last item when it lies beyond the total extent. Returns
    /// `None` only for an empty axis.
    pub fn index_at(&self, point: f32, bias: Bias) -> Option<usize> {
        if self.positions.is_empty() {
            return None;
        }
        let index = match bias {
            Bias::Left => {
                let at = self.positions.partition_point(|&edge| edge < point);
                // exact edge hit keeps the left-most tied index; otherwise
                // step back to the item whose span contains the point
                match self.positions.get(at) {
                    Some(&edge) if edge <= point => at,
                    _ => at.saturating_sub(1),
                }
            }
            Bias::Right => self
                .positions
                .partition_point(|&edge| edge <= point)
                .saturating_sub(1),
        };
        Some(index)
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
    fn test_fixed_layout() {
        let layout = AxisLayout::build(&AxisSpec::fixed(5, 10.0));
        assert_eq!(layout.count(), 5);
        assert_eq!(layout.positions(), &[0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(layout.sizes(), &[10.0; 5]);
        assert_eq!(layout.total_extent(), 50.0);
    }

    #[test]
    fn test_fixed_degenerates_to_multiplication() {
        let layout = AxisLayout::build(&AxisSpec::fixed(100, 7.5));
        for i in 0..100 {
            assert_eq!(layout.position(i), i as f32 * 7.5);
        }
    }

    #[test]
    fn test_variable_layout() {
        let layout = AxisLayout::build(&AxisSpec::variable(3, |i| [10.0, 20.0, 30.0][i]));
        assert_eq!(layout.positions(), &[0.0, 10.0, 30.0]);
        assert_eq!(layout.sizes(), &[10.0, 20.0, 30.0]);
        assert_eq!(layout.total_extent(), 60.0);
    }

    #[test]
    fn test_cumulative_invariant() {
        let layout = AxisLayout::build(&AxisSpec::variable(50, |i| 1.0 + (i % 7) as f32));
        assert_eq!(layout.position(0), 0.0);
        for i in 1..50 {
            assert_eq!(
                layout.position(i),
                layout.position(i - 1) + layout.size(i - 1)
            );
        }
    }

    #[test]
    fn test_empty_layout() {
        let layout = AxisLayout::build(&AxisSpec::fixed(0, 10.0));
        assert!(layout.is_empty());
        assert_eq!(layout.total_extent(), 0.0);
        assert_eq!(layout.index_at(0.0, Bias::Left), None);
        assert_eq!(layout.index_at(0.0, Bias::Right), None);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let spec = AxisSpec::variable(20, |i| 5.0 + i as f32);
        assert_eq!(AxisLayout::build(&spec), AxisLayout::build(&spec));
    }

    #[test]
    fn test_index_at_interior_point() {
        let layout = AxisLayout::build(&AxisSpec::fixed(5, 10.0));
        assert_eq!(layout.index_at(15.0, Bias::Left), Some(1));
        assert_eq!(layout.index_at(15.0, Bias::Right), Some(1));
    }

    #[test]
    fn test_index_at_exact_edge() {
        // point exactly on an item's leading edge selects that item
        let layout = AxisLayout::build(&AxisSpec::variable(3, |i| [10.0, 20.0, 30.0][i]));
        assert_eq!(layout.index_at(30.0, Bias::Left), Some(2));
        assert_eq!(layout.index_at(30.0, Bias::Right), Some(2));
        assert_eq!(layout.index_at(0.0, Bias::Left), Some(0));
    }

    #[test]
    fn test_index_at_clamps_to_axis() {
        let layout = AxisLayout::build(&AxisSpec::fixed(5, 10.0));
        assert_eq!(layout.index_at(-3.0, Bias::Left), Some(0));
        assert_eq!(layout.index_at(-3.0, Bias::Right), Some(0));
        assert_eq!(layout.index_at(1_000.0, Bias::Left), Some(4));
        assert_eq!(layout.index_at(1_000.0, Bias::Right), Some(4));
    }

    #[test]
    fn test_accessors_out_of_range() {
        let layout = AxisLayout::build(&AxisSpec::fixed(2, 10.0));
        assert_eq!(layout.position(10), 0.0);
        assert_eq!(layout.size(10), 0.0);
    }
}
