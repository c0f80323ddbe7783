use plankit_core::config::CoordinateReference;
use plankit_core::shape::{Shape, ShapeKind};
use plankit_core::sheet::Sheet;
use plankit_core::types::{Point, WorldPoint};
use plankit_export::error::ExportError;
use plankit_export::geojson::{GeoGeometry, GeoJsonMapper};

fn calibrated_sheet() -> Sheet {
    let mut sheet = Sheet::new("plan", 1000.0, 800.0);
    sheet.calibration.references.push(CoordinateReference::new(
        1,
        Point::new(0.0, 0.0),
        WorldPoint::new(0.0, 0.0),
    ));
    sheet.calibration.references.push(CoordinateReference::new(
        2,
        Point::new(100.0, 0.0),
        WorldPoint::new(10.0, 0.0),
    ));
    sheet
}

fn assert_position(position: &[f64], expected: &[f64]) {
    assert_eq!(position.len(), expected.len());
    for (got, want) in position.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{:?} vs {:?}", position, expected);
    }
}

#[test]
fn test_uncalibrated_sheet_is_rejected() {
    let sheet = Sheet::new("plan", 1000.0, 800.0);
    let err = GeoJsonMapper::for_sheet(&sheet).unwrap_err();
    assert_eq!(err, ExportError::CalibrationRequired { format: "GeoJSON" });
}

#[test]
fn test_ring_becomes_closed_polygon() {
    let sheet = calibrated_sheet();
    let mapper = GeoJsonMapper::for_sheet(&sheet).unwrap();
    let room = Shape::rectangle(1, Point::new(0.0, 0.0), Point::new(100.0, 50.0));

    let feature = mapper.map_shape(&room).unwrap();
    match &feature.geometry {
        GeoGeometry::Polygon(rings) => {
            assert_eq!(rings.len(), 1);
            let ring = &rings[0];
            assert_eq!(ring.len(), 5);
            assert_position(&ring[0], &[0.0, 0.0]);
            assert_position(&ring[1], &[10.0, 0.0]);
            assert_position(&ring[2], &[10.0, 5.0]);
            assert_position(&ring[3], &[0.0, 5.0]);
            assert_position(&ring[4], &[0.0, 0.0]);
        }
        other => panic!("expected polygon, got {:?}", other),
    }
    assert_eq!(feature.properties.kind, "Rectangle");
}

#[test]
fn test_line_becomes_linestring() {
    let sheet = calibrated_sheet();
    let mapper = GeoJsonMapper::for_sheet(&sheet).unwrap();
    let wall = Shape::line(1, Point::new(0.0, 0.0), Point::new(50.0, 0.0));

    let feature = mapper.map_shape(&wall).unwrap();
    match &feature.geometry {
        GeoGeometry::LineString(positions) => {
            assert_eq!(positions.len(), 2);
            assert_position(&positions[1], &[5.0, 0.0]);
        }
        other => panic!("expected linestring, got {:?}", other),
    }
}

#[test]
fn test_anchor_becomes_point_feature() {
    let sheet = calibrated_sheet();
    let mapper = GeoJsonMapper::for_sheet(&sheet).unwrap();
    let mut marker = Shape::new(1, ShapeKind::Icon, vec![Point::new(100.0, 0.0)]);
    marker.label = "Hydrant".to_string();
    marker.color = "#2040e0".to_string();

    let feature = mapper.map_shape(&marker).unwrap();
    match &feature.geometry {
        GeoGeometry::Point(position) => assert_position(position, &[10.0, 0.0]),
        other => panic!("expected point, got {:?}", other),
    }
    assert_eq!(feature.properties.label, "Hydrant");
    assert_eq!(feature.properties.color, "#2040e0");
}

#[test]
fn test_elevation_appears_as_third_coordinate() {
    let mut sheet = Sheet::new("plan", 1000.0, 800.0);
    sheet.calibration.references.push(CoordinateReference::new(
        1,
        Point::new(0.0, 0.0),
        WorldPoint::with_elevation(0.0, 0.0, 100.0),
    ));
    sheet.calibration.references.push(CoordinateReference::new(
        2,
        Point::new(100.0, 0.0),
        WorldPoint::with_elevation(10.0, 0.0, 110.0),
    ));
    let mapper = GeoJsonMapper::for_sheet(&sheet).unwrap();

    let marker = Shape::new(1, ShapeKind::Icon, vec![Point::new(50.0, 0.0)]);
    let feature = mapper.map_shape(&marker).unwrap();
    match &feature.geometry {
        GeoGeometry::Point(position) => assert_position(position, &[5.0, 0.0, 105.0]),
        other => panic!("expected point, got {:?}", other),
    }
}

#[test]
fn test_circle_is_approximated_as_ring_around_center() {
    let sheet = calibrated_sheet();
    let mapper = GeoJsonMapper::for_sheet(&sheet).unwrap();
    let column = Shape::circle(1, Point::new(50.0, 50.0), Point::new(70.0, 50.0));

    let feature = mapper.map_shape(&column).unwrap();
    match &feature.geometry {
        GeoGeometry::Polygon(rings) => {
            let ring = &rings[0];
            assert_eq!(ring.len(), 33);
            assert_position(&ring[0], &[7.0, 5.0]);
            // Every vertex sits 2 m from the world center.
            for position in ring {
                let dx = position[0] - 5.0;
                let dy = position[1] - 5.0;
                assert!(((dx * dx + dy * dy).sqrt() - 2.0).abs() < 1e-9);
            }
        }
        other => panic!("expected polygon, got {:?}", other),
    }
}

#[test]
fn test_feature_collection_serializes_to_geojson_shape() {
    let mut sheet = calibrated_sheet();
    sheet.create_shape(
        ShapeKind::Rectangle,
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(0.0, 50.0),
        ],
    );
    let mapper = GeoJsonMapper::for_sheet(&sheet).unwrap();
    let collection = mapper.map_sheet(&sheet);

    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"][0]["type"], "Feature");
    assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
    assert_eq!(value["features"][0]["properties"]["kind"], "Rectangle");
    assert!(value["features"][0]["geometry"]["coordinates"][0][0].is_array());
}
