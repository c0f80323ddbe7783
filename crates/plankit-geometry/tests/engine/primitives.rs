use plankit_core::types::Point;
use plankit_geometry::primitives::{
    bounding_box, centroid, closest_point_on_segment, distance, midpoint, orientation,
    point_in_polygon, point_to_segment_distance, polygon_area, rotate_point,
    scale_toward_centroid, Orientation,
};

fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

#[test]
fn test_distance_and_midpoint() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(6.0, 8.0);
    assert_eq!(distance(a, b), 10.0);
    assert_eq!(midpoint(a, b), Point::new(3.0, 4.0));
}

#[test]
fn test_centroid_degenerate_counts() {
    let single = Point::new(7.0, -2.0);
    assert_eq!(centroid(&[single]), single);
    assert_eq!(
        centroid(&[Point::new(0.0, 0.0), Point::new(4.0, 2.0)]),
        Point::new(2.0, 1.0)
    );
}

#[test]
fn test_centroid_is_vertex_average() {
    let c = centroid(&[
        Point::new(0.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(0.0, 6.0),
    ]);
    assert!((c.x - 2.0).abs() < 1e-12);
    assert!((c.y - 2.0).abs() < 1e-12);
}

#[test]
fn test_bounding_box() {
    let b = bounding_box(&[
        Point::new(3.0, -1.0),
        Point::new(-2.0, 4.0),
        Point::new(1.0, 1.0),
    ]);
    assert_eq!(b.min_x, -2.0);
    assert_eq!(b.max_x, 3.0);
    assert_eq!(b.min_y, -1.0);
    assert_eq!(b.max_y, 4.0);
    assert_eq!(b.width(), 5.0);
    assert_eq!(b.height(), 5.0);
}

#[test]
fn test_point_to_segment_projection() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    // Interior projection.
    assert_eq!(point_to_segment_distance(Point::new(5.0, 3.0), a, b), 3.0);
    // Projection parameter clamps at the near endpoint.
    assert_eq!(point_to_segment_distance(Point::new(-4.0, 3.0), a, b), 5.0);
    assert_eq!(
        closest_point_on_segment(Point::new(13.0, 4.0), a, b),
        Point::new(10.0, 0.0)
    );
}

#[test]
fn test_zero_length_segment_projects_to_endpoint() {
    let a = Point::new(2.0, 2.0);
    assert_eq!(closest_point_on_segment(Point::new(5.0, 6.0), a, a), a);
    assert_eq!(point_to_segment_distance(Point::new(5.0, 6.0), a, a), 5.0);
}

#[test]
fn test_point_in_polygon_unit_square() {
    let square = unit_square();
    assert!(point_in_polygon(Point::new(0.5, 0.5), &square));
    assert!(!point_in_polygon(Point::new(1.5, 0.5), &square));
    assert!(!point_in_polygon(Point::new(0.5, -0.5), &square));
}

#[test]
fn test_point_in_polygon_boundary_is_deterministic() {
    // Boundary results are unspecified but must not flicker between
    // identical calls.
    let square = unit_square();
    let boundary = Point::new(0.0, 0.5);
    let first = point_in_polygon(boundary, &square);
    for _ in 0..10 {
        assert_eq!(point_in_polygon(boundary, &square), first);
    }
}

#[test]
fn test_point_in_polygon_concave() {
    // L-shape: the notch at the top right is outside.
    let ell = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 2.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 4.0),
        Point::new(0.0, 4.0),
    ];
    assert!(point_in_polygon(Point::new(1.0, 3.0), &ell));
    assert!(!point_in_polygon(Point::new(3.0, 3.0), &ell));
}

#[test]
fn test_polygon_area_unit_square() {
    let square = unit_square();
    assert!((polygon_area(&square) - 1.0).abs() < 1e-12);

    // Vertex-list rotation keeps the area.
    let rotated = vec![square[2], square[3], square[0], square[1]];
    assert!((polygon_area(&rotated) - 1.0).abs() < 1e-12);

    // Reversed winding keeps the absolute area.
    let reversed: Vec<Point> = square.iter().rev().copied().collect();
    assert!((polygon_area(&reversed) - 1.0).abs() < 1e-12);
}

#[test]
fn test_polygon_area_degenerate() {
    assert_eq!(polygon_area(&[]), 0.0);
    assert_eq!(polygon_area(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), 0.0);
}

#[test]
fn test_orientation_classification() {
    let p = Point::new(0.0, 0.0);
    let q = Point::new(4.0, 0.0);
    assert_eq!(orientation(p, q, Point::new(8.0, 0.0)), Orientation::Collinear);
    // Turning toward negative y is the clockwise side.
    assert_eq!(
        orientation(p, q, Point::new(4.0, -2.0)),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation(p, q, Point::new(4.0, 2.0)),
        Orientation::CounterClockwise
    );
}

#[test]
fn test_rotate_point_quarter_turn() {
    let rotated = rotate_point(Point::new(1.0, 0.0), Point::new(0.0, 0.0), 90.0);
    assert!((rotated.x - 0.0).abs() < 1e-12);
    assert!((rotated.y - 1.0).abs() < 1e-12);
}

#[test]
fn test_scale_toward_centroid() {
    let square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let shrunk = scale_toward_centroid(&square, 0.5);
    assert_eq!(shrunk[0], Point::new(2.5, 2.5));
    assert_eq!(shrunk[2], Point::new(7.5, 7.5));
    assert!((polygon_area(&shrunk) - 25.0).abs() < 1e-9);
}
