//! Property-based tests for layout invariants and window resolution.
//!
//! Exercises the geometric invariants over arbitrary size sequences,
//! offsets, extents, and overscan margins.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use proptest::prelude::*;
use stickygrid::{resolve_window, AxisLayout, AxisSpec, WindowResolver};

fn layout_from(sizes: &[f32]) -> AxisLayout {
    let owned = sizes.to_vec();
    AxisLayout::build(&AxisSpec::variable(owned.len(), move |i| owned[i]))
}

fn sizes_strategy() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(1.0f32..64.0, 1..128)
}

proptest! {
    #[test]
    fn layout_positions_are_cumulative(sizes in sizes_strategy()) {
        let layout = layout_from(&sizes);
        prop_assert_eq!(layout.count(), sizes.len());
        prop_assert_eq!(layout.position(0), 0.0);
        for i in 1..layout.count() {
            prop_assert_eq!(
                layout.position(i),
                layout.position(i - 1) + layout.size(i - 1)
            );
            prop_assert!(layout.position(i) > layout.position(i - 1));
        }
    }

    #[test]
    fn rebuild_is_idempotent(sizes in sizes_strategy()) {
        prop_assert_eq!(layout_from(&sizes), layout_from(&sizes));
    }

    #[test]
    fn window_stays_inside_axis(
        sizes in sizes_strategy(),
        offset in 0.0f32..10_000.0,
        extent in 0.0f32..2_000.0,
        overscan in 0usize..16,
    ) {
        let layout = layout_from(&sizes);
        let range = resolve_window(&layout, offset, extent, overscan).unwrap();
        prop_assert!(range.min <= range.max);
        prop_assert!(range.max < layout.count());
    }

    #[test]
    fn window_never_omits_an_intersecting_item(
        sizes in sizes_strategy(),
        offset in 0.0f32..10_000.0,
        extent in 0.0f32..2_000.0,
    ) {
        let layout = layout_from(&sizes);
        let range = resolve_window(&layout, offset, extent, 0).unwrap();
        for i in 0..layout.count() {
            let start = layout.position(i);
            let end = start + layout.size(i);
            // open intersection with the viewport's interior
            if start < offset + extent && end > offset {
                prop_assert!(
                    range.contains(i),
                    "item {} spanning [{}, {}) omitted from {:?} for viewport [{}, {}]",
                    i, start, end, range, offset, offset + extent
                );
            }
        }
    }

    #[test]
    fn increasing_offset_is_monotonic(
        sizes in sizes_strategy(),
        a in 0.0f32..5_000.0,
        delta in 0.0f32..5_000.0,
        extent in 0.0f32..1_000.0,
    ) {
        let layout = layout_from(&sizes);
        let near = resolve_window(&layout, a, extent, 0).unwrap();
        let far = resolve_window(&layout, a + delta, extent, 0).unwrap();
        prop_assert!(far.min >= near.min);
        prop_assert!(far.max >= near.max);
    }

    #[test]
    fn increasing_extent_is_monotonic(
        sizes in sizes_strategy(),
        offset in 0.0f32..5_000.0,
        extent in 0.0f32..1_000.0,
        growth in 0.0f32..1_000.0,
    ) {
        let layout = layout_from(&sizes);
        let small = resolve_window(&layout, offset, extent, 0).unwrap();
        let large = resolve_window(&layout, offset, extent + growth, 0).unwrap();
        prop_assert_eq!(small.min, large.min);
        prop_assert!(large.max >= small.max);
    }

    #[test]
    fn increasing_overscan_is_monotonic(
        sizes in sizes_strategy(),
        offset in 0.0f32..5_000.0,
        extent in 0.0f32..1_000.0,
        overscan in 0usize..8,
        growth in 0usize..8,
    ) {
        let layout = layout_from(&sizes);
        let narrow = resolve_window(&layout, offset, extent, overscan).unwrap();
        let wide = resolve_window(&layout, offset, extent, overscan + growth).unwrap();
        prop_assert!(wide.min <= narrow.min);
        prop_assert!(wide.max >= narrow.max);
    }

    #[test]
    fn cached_resolver_is_transparent(
        sizes in sizes_strategy(),
        offsets in proptest::collection::vec(0.0f32..5_000.0, 1..64),
        extent in 0.0f32..1_000.0,
        overscan in 0usize..8,
    ) {
        let layout = layout_from(&sizes);
        let mut resolver = WindowResolver::new(layout.clone(), overscan);
        resolver.set_extent(extent);
        for &offset in &offsets {
            let pure = resolve_window(&layout, offset, extent, overscan).unwrap();
            prop_assert_eq!(resolver.resolve(offset).unwrap(), pure);
            prop_assert_eq!(resolver.resolve(offset).unwrap(), pure);
        }
    }
}
