use proptest::prelude::*;
use timeline_grid::api::{TimelineGrid, TimelineGridConfig};
use timeline_grid::core::Viewport;
use timeline_grid::render::NullRenderer;

fn grid_with_markers(markers: &[u64]) -> TimelineGrid<NullRenderer> {
    let config = TimelineGridConfig::new(Viewport::new(800, 50));
    let mut grid = TimelineGrid::new(NullRenderer::default(), config).expect("grid init");
    grid.set_full_range(100);
    grid.set_visible_range(100);
    for marker in markers {
        grid.add_marker(*marker);
    }
    grid
}

fn occurrences(markers: &[u64], value: u64) -> usize {
    markers.iter().filter(|marker| **marker == value).count()
}

proptest! {
    #[test]
    fn remove_marker_drops_exactly_one_occurrence(
        markers in prop::collection::vec(0u64..20u64, 1..32),
        pick in any::<prop::sample::Index>()
    ) {
        let target = markers[pick.index(markers.len())];
        let mut grid = grid_with_markers(&markers);

        prop_assert!(grid.remove_marker(target));
        prop_assert_eq!(grid.markers().len(), markers.len() - 1);
        prop_assert_eq!(
            occurrences(grid.markers(), target),
            occurrences(&markers, target) - 1
        );
        for value in 0u64..20 {
            if value != target {
                prop_assert_eq!(occurrences(grid.markers(), value), occurrences(&markers, value));
            }
        }
    }

    #[test]
    fn removing_absent_marker_is_a_no_op(
        markers in prop::collection::vec(0u64..20u64, 0..32),
        absent in 20u64..40u64
    ) {
        let mut grid = grid_with_markers(&markers);
        prop_assert!(!grid.remove_marker(absent));
        prop_assert_eq!(grid.markers(), markers.as_slice());
    }
}

#[test]
fn clear_markers_empties_the_set() {
    let mut grid = grid_with_markers(&[5, 5, 7]);
    grid.clear_markers();
    assert!(grid.markers().is_empty());
    assert!(!grid.remove_marker(5));
}
