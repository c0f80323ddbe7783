use plankit_core::types::Point;
use plankit_geometry::intersect::{
    polygons_intersect, segments_cross, segments_intersect, would_self_intersect,
};

fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ]
}

#[test]
fn test_segments_intersect_crossing() {
    assert!(segments_intersect(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    ));
}

#[test]
fn test_segments_intersect_disjoint() {
    assert!(!segments_intersect(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(10.0, 5.0),
    ));
}

#[test]
fn test_segments_intersect_collinear_cases() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    // Collinear with overlap.
    assert!(segments_intersect(a, b, Point::new(5.0, 0.0), Point::new(15.0, 0.0)));
    // Collinear but separated.
    assert!(!segments_intersect(a, b, Point::new(11.0, 0.0), Point::new(20.0, 0.0)));
}

#[test]
fn test_segments_cross_excludes_shared_endpoints() {
    let shared = Point::new(10.0, 0.0);
    let a = Point::new(0.0, 0.0);
    let c = Point::new(20.0, 5.0);
    // Touching at a shared vertex intersects but does not cross.
    assert!(segments_intersect(a, shared, shared, c));
    assert!(!segments_cross(a, shared, shared, c));
    // Near-coincident endpoints count as shared too.
    assert!(!segments_cross(a, shared, Point::new(10.05, 0.0), c));
    // Genuine crossings still cross.
    assert!(segments_cross(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    ));
}

#[test]
fn test_square_closes_without_false_positive() {
    let drawn = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    // Clicking back on the first vertex closes the ring cleanly.
    assert!(!would_self_intersect(&drawn, Point::new(0.0, 0.0)));
    assert!(!would_self_intersect(&drawn, Point::new(0.05, 0.05)));
}

#[test]
fn test_crossing_vertex_is_rejected() {
    let drawn = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 0.0),
    ];
    // The edge to (0,10) would cross the first edge.
    assert!(would_self_intersect(&drawn, Point::new(0.0, 10.0)));
}

#[test]
fn test_adjacent_extension_is_allowed() {
    let drawn = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ];
    assert!(!would_self_intersect(&drawn, Point::new(5.0, 5.0)));
}

#[test]
fn test_short_ring_never_self_intersects() {
    let drawn = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    assert!(!would_self_intersect(&drawn, Point::new(5.0, 5.0)));
}

#[test]
fn test_polygons_intersect_area_overlap() {
    assert!(polygons_intersect(&square(0.0, 0.0, 10.0), &square(5.0, 5.0, 10.0)));
}

#[test]
fn test_polygons_intersect_disjoint() {
    assert!(!polygons_intersect(&square(0.0, 0.0, 10.0), &square(20.0, 0.0, 10.0)));
}

#[test]
fn test_shared_edge_is_not_overlap() {
    // Two rooms sharing a wall must not count as overlapping.
    assert!(!polygons_intersect(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0)));
}

#[test]
fn test_shared_vertex_is_not_overlap() {
    assert!(!polygons_intersect(&square(0.0, 0.0, 10.0), &square(10.0, 10.0, 10.0)));
}

#[test]
fn test_containment_counts_as_overlap() {
    // No edges cross, the small ring is swallowed whole.
    assert!(polygons_intersect(&square(0.0, 0.0, 20.0), &square(5.0, 5.0, 2.0)));
    assert!(polygons_intersect(&square(5.0, 5.0, 2.0), &square(0.0, 0.0, 20.0)));
}

#[test]
fn test_degenerate_rings_do_not_overlap() {
    let line = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    assert!(!polygons_intersect(&line, &square(0.0, 0.0, 10.0)));
}
