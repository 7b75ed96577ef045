mod test_utils;

use fuzzy_overlay::geom::RingGroup;
use fuzzy_overlay::overlay::{OverlayOptions, cut_xy};
use fuzzy_overlay::{open_ring, ring};
use test_utils::{GroupProperties, create_property_set, property_sets_match, square};

fn opts() -> OverlayOptions<f64> {
    OverlayOptions::default()
}

#[test]
fn line_cut_side_properties() {
    // vertical cut heading up: smaller x is the left side
    let a = square(0.0, 0.0, 2.0);
    let cutter = open_ring![(0.75, -0.5), (0.75, 2.5)];
    let r = cut_xy(&a, &cutter, &opts());

    let expected_left = &[GroupProperties::new(1, 1.5, 0.0, 0.0, 0.75, 2.0)];
    assert!(property_sets_match(
        &create_property_set(&r.left),
        expected_left
    ));
    let expected_right = &[GroupProperties::new(1, 2.5, 0.75, 0.0, 2.0, 2.0)];
    assert!(property_sets_match(
        &create_property_set(&r.right),
        expected_right
    ));
    assert!(r.undetermined.is_empty());
}

#[test]
fn reversed_cutter_swaps_sides() {
    let a = square(0.0, 0.0, 2.0);
    let up = open_ring![(0.75, -0.5), (0.75, 2.5)];
    let down = open_ring![(0.75, 2.5), (0.75, -0.5)];

    let r_up = cut_xy(&a, &up, &opts());
    let r_down = cut_xy(&a, &down, &opts());

    assert!((r_up.left[0].area() - r_down.right[0].area()).abs() < 1e-9);
    assert!((r_up.right[0].area() - r_down.left[0].area()).abs() < 1e-9);
}

#[test]
fn cookie_cut_properties() {
    let a = square(0.0, 0.0, 4.0);
    let cutter = square(1.0, 1.0, 2.0);
    let r = cut_xy(&a, &cutter, &opts());

    // counter clockwise cutter: the island face is on its left
    let expected_left = &[GroupProperties::new(1, 4.0, 1.0, 1.0, 3.0, 3.0)];
    assert!(property_sets_match(
        &create_property_set(&r.left),
        expected_left
    ));
    let expected_right = &[GroupProperties::new(2, 12.0, 0.0, 0.0, 4.0, 4.0)];
    assert!(property_sets_match(
        &create_property_set(&r.right),
        expected_right
    ));
}

#[test]
fn closed_cutter_overlapping_boundary() {
    // cutter straddles the bottom edge; only its upper half cuts
    let a = square(0.0, 0.0, 4.0);
    let cutter = square(1.0, -1.0, 2.0);
    let r = cut_xy(&a, &cutter, &opts());

    let expected_left = &[GroupProperties::new(1, 2.0, 1.0, 0.0, 3.0, 1.0)];
    assert!(property_sets_match(
        &create_property_set(&r.left),
        expected_left
    ));
    let expected_right = &[GroupProperties::new(1, 14.0, 0.0, 0.0, 4.0, 4.0)];
    assert!(property_sets_match(
        &create_property_set(&r.right),
        expected_right
    ));
}

#[test]
fn multi_part_source_cut() {
    // the cutter only reaches the first part; the second is left whole
    let a = vec![square(0.0, 0.0, 1.0), square(3.0, 0.0, 1.0)];
    let cutter = open_ring![(0.5, -1.0), (0.5, 2.0)];
    let r = cut_xy(&a, &cutter, &opts());

    assert_eq!(r.left.len(), 1);
    assert!((r.left[0].area() - 0.5).abs() < 1e-9);
    assert_eq!(r.right.len(), 1);
    assert!((r.right[0].area() - 0.5).abs() < 1e-9);
    assert_eq!(r.undetermined.len(), 1);
    assert!((r.undetermined[0].area() - 1.0).abs() < 1e-9);
}

#[test]
fn donut_cut_consumes_hole() {
    let donut = RingGroup::with_holes(
        square(0.0, 0.0, 4.0),
        vec![square(1.0, 1.0, 2.0).reversed()],
    );
    let cutter = open_ring![(2.0, -1.0), (2.0, 5.0)];
    let r = cut_xy(&donut, &cutter, &opts());

    let expected_left = &[GroupProperties::new(1, 6.0, 0.0, 0.0, 2.0, 4.0)];
    assert!(property_sets_match(
        &create_property_set(&r.left),
        expected_left
    ));
    let expected_right = &[GroupProperties::new(1, 6.0, 2.0, 0.0, 4.0, 4.0)];
    assert!(property_sets_match(
        &create_property_set(&r.right),
        expected_right
    ));
}

#[test]
fn cut_conserves_area() {
    let a = square(0.0, 0.0, 4.0);
    let cutters = [
        open_ring![(2.0, -1.0), (2.0, 5.0)],
        open_ring![(-1.0, 0.0), (5.0, 3.0)],
        square(1.0, 1.0, 2.0),
        ring![(2.0, 0.0), (3.0, 1.0), (2.0, 2.0), (1.0, 1.0)],
        open_ring![(2.0, -1.0), (2.0, 2.0)],
        square(6.0, 6.0, 1.0),
    ];

    for cutter in &cutters {
        let r = cut_xy(&a, cutter, &opts());
        assert!((r.area() - 16.0).abs() < 1e-9);
    }
}

#[test]
fn one_point_touch_splices_face() {
    // closed cutter inside the square, touching its bottom edge at one point
    let a = square(0.0, 0.0, 4.0);
    let cutter = ring![(2.0, 0.0), (3.0, 1.0), (2.0, 2.0), (1.0, 1.0)];
    let r = cut_xy(&a, &cutter, &opts());

    assert_eq!(r.left.len(), 1);
    assert!((r.left[0].area() - 2.0).abs() < 1e-9);
    assert_eq!(r.right.len(), 1);
    assert!((r.right[0].area() - 14.0).abs() < 1e-9);
    assert!(r.undetermined.is_empty());
}

#[test]
fn v_notch_cut_through_one_edge() {
    // V shaped cutter entering and leaving through the bottom edge
    let a = square(0.0, 0.0, 4.0);
    let cutter = open_ring![(1.0, -0.5), (2.0, 1.0), (3.0, -0.5)];
    let r = cut_xy(&a, &cutter, &opts());

    // traveling up then down, the notch triangle sits on the cutter's right
    assert_eq!(r.left.len(), 1);
    assert_eq!(r.right.len(), 1);
    assert!((r.right[0].area() - 2.0 / 3.0).abs() < 1e-9);
    assert!((r.left[0].area() - (16.0 - 2.0 / 3.0)).abs() < 1e-9);
    assert!((r.area() - 16.0).abs() < 1e-9);
}

#[test]
fn cut_face_counts() {
    // same geometry pushed through both a splitting and a non-splitting cut
    let a = square(0.0, 0.0, 2.0);

    let r = cut_xy(&a, &open_ring![(1.0, -1.0), (1.0, 3.0)], &opts());
    assert_eq!(r.left.len() + r.right.len() + r.undetermined.len(), 2);

    let r = cut_xy(&a, &open_ring![(1.0, -1.0), (1.0, 1.0)], &opts());
    assert_eq!(r.left.len() + r.right.len() + r.undetermined.len(), 1);
}
