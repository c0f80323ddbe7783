use plankit_core::types::Point;
use plankit_geometry::label::place_label;

fn rect(w: f64, h: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ]
}

#[test]
fn test_wide_room_label() {
    let placement = place_label(&rect(100.0, 40.0)).unwrap();
    assert_eq!(placement.anchor, Point::new(50.0, 20.0));
    // Nearest edge is 20 away; minus padding 6, times 1.5.
    assert!((placement.max_font_size - 21.0).abs() < 1e-9);
    assert_eq!(placement.rotation_deg, 0.0);
}

#[test]
fn test_tall_room_reads_bottom_up() {
    let placement = place_label(&rect(40.0, 100.0)).unwrap();
    assert_eq!(placement.rotation_deg, -90.0);
}

#[test]
fn test_angled_room_follows_longest_edge() {
    // Long corridor at 45 degrees.
    let corridor = vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(90.0, 110.0),
        Point::new(-10.0, 10.0),
    ];
    let placement = place_label(&corridor).unwrap();
    assert!((placement.rotation_deg - 45.0).abs() < 1e-9);
}

#[test]
fn test_near_horizontal_snaps_flat() {
    // Longest edge at ~5.7 degrees snaps to 0.
    let sliver = vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 10.0),
        Point::new(100.0, 40.0),
        Point::new(0.0, 30.0),
    ];
    let placement = place_label(&sliver).unwrap();
    assert_eq!(placement.rotation_deg, 0.0);
}

#[test]
fn test_near_vertical_snaps_to_minus_ninety() {
    // Longest edge at ~84 degrees, bounding box roughly square so the
    // tall-ring shortcut does not fire first.
    let ring = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 95.0),
        Point::new(100.0, 95.0),
        Point::new(95.0, 0.0),
    ];
    let placement = place_label(&ring).unwrap();
    assert_eq!(placement.rotation_deg, -90.0);
}

#[test]
fn test_small_ring_keeps_minimum_font() {
    let placement = place_label(&rect(10.0, 8.0)).unwrap();
    // Safe radius is negative after padding; the floor holds.
    assert_eq!(placement.max_font_size, 8.0);
}

#[test]
fn test_degenerate_ring_has_no_placement() {
    assert!(place_label(&[]).is_none());
    assert!(place_label(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]).is_none());
}
