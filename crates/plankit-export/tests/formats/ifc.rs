use plankit_core::config::CoordinateReference;
use plankit_core::shape::{Shape, ShapeKind};
use plankit_core::sheet::Sheet;
use plankit_core::types::{Point, WorldPoint};
use plankit_export::error::ExportError;
use plankit_export::ifc::IfcModelMapper;

fn sheet_with_references(r1: WorldPoint, r2: WorldPoint) -> Sheet {
    let mut sheet = Sheet::new("plan", 1000.0, 800.0);
    sheet.calibration.references.push(CoordinateReference::new(
        1,
        Point::new(0.0, 0.0),
        r1,
    ));
    sheet.calibration.references.push(CoordinateReference::new(
        2,
        Point::new(100.0, 0.0),
        r2,
    ));
    sheet
}

fn square_100px(id: u64) -> Shape {
    Shape::polygon(
        id,
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ],
    )
}

#[test]
fn test_uncalibrated_sheet_is_rejected() {
    let sheet = Sheet::new("plan", 1000.0, 800.0);
    let err = IfcModelMapper::for_sheet(&sheet).unwrap_err();
    assert_eq!(err, ExportError::CalibrationRequired { format: "IFC" });
}

#[test]
fn test_placement_origin_is_first_world_vertex() {
    let sheet = sheet_with_references(WorldPoint::new(0.0, 0.0), WorldPoint::new(10.0, 0.0));
    let mapper = IfcModelMapper::for_sheet(&sheet).unwrap();

    let mut room = square_100px(1);
    room.translate(200.0, 300.0);
    let space = mapper.map_shape(&room).unwrap();

    assert!((space.origin.x - 20.0).abs() < 1e-9);
    assert!((space.origin.y - 30.0).abs() < 1e-9);
    // The profile starts at its own origin.
    assert!(space.profile[0].x.abs() < 1e-9);
    assert!(space.profile[0].y.abs() < 1e-9);
}

#[test]
fn test_profile_is_relative_and_translation_invariant() {
    let sheet = sheet_with_references(WorldPoint::new(0.0, 0.0), WorldPoint::new(10.0, 0.0));
    let mapper = IfcModelMapper::for_sheet(&sheet).unwrap();

    let room = square_100px(1);
    let mut moved = square_100px(2);
    moved.translate(1000.0, -400.0);

    let a = mapper.map_shape(&room).unwrap();
    let b = mapper.map_shape(&moved).unwrap();
    for (pa, pb) in a.profile.iter().zip(&b.profile) {
        assert!((pa.x - pb.x).abs() < 1e-9);
        assert!((pa.y - pb.y).abs() < 1e-9);
    }
    assert!((b.origin.x - 100.0).abs() < 1e-9);
    assert!((b.origin.y + 40.0).abs() < 1e-9);
}

#[test]
fn test_area_in_square_meters() {
    let sheet = sheet_with_references(WorldPoint::new(0.0, 0.0), WorldPoint::new(10.0, 0.0));
    let mapper = IfcModelMapper::for_sheet(&sheet).unwrap();

    // 100 px at 0.1 m/px is a 10 m square.
    let space = mapper.map_shape(&square_100px(1)).unwrap();
    assert!((space.area_m2 - 100.0).abs() < 1e-9);
}

#[test]
fn test_area_survives_rotated_calibration() {
    // References at a right angle: world axes rotated 90 degrees.
    let sheet = sheet_with_references(WorldPoint::new(0.0, 0.0), WorldPoint::new(0.0, 10.0));
    let mapper = IfcModelMapper::for_sheet(&sheet).unwrap();

    let space = mapper.map_shape(&square_100px(1)).unwrap();
    assert!((space.area_m2 - 100.0).abs() < 1e-9);
}

#[test]
fn test_elevation_from_references() {
    let sheet = sheet_with_references(
        WorldPoint::with_elevation(0.0, 0.0, 12.0),
        WorldPoint::with_elevation(10.0, 0.0, 12.0),
    );
    let mapper = IfcModelMapper::for_sheet(&sheet).unwrap();

    let space = mapper.map_shape(&square_100px(1)).unwrap();
    assert_eq!(space.origin.z, Some(12.0));
}

#[test]
fn test_non_ring_shapes_have_no_space() {
    let sheet = sheet_with_references(WorldPoint::new(0.0, 0.0), WorldPoint::new(10.0, 0.0));
    let mapper = IfcModelMapper::for_sheet(&sheet).unwrap();

    let wall = Shape::line(1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    assert!(mapper.map_shape(&wall).is_none());

    let marker = Shape::new(2, ShapeKind::Icon, vec![Point::new(10.0, 10.0)]);
    assert!(mapper.map_shape(&marker).is_none());
}

#[test]
fn test_map_sheet_collects_ring_spaces_only() {
    let mut sheet = sheet_with_references(WorldPoint::new(0.0, 0.0), WorldPoint::new(10.0, 0.0));
    sheet.add_shape(square_100px(1));
    sheet.add_shape(Shape::line(2, Point::new(0.0, 0.0), Point::new(50.0, 0.0)));
    let mapper = IfcModelMapper::for_sheet(&sheet).unwrap();

    let spaces = mapper.map_sheet(&sheet);
    assert_eq!(spaces.len(), 1);
    assert_eq!(spaces[0].label, "Polygon");
}
