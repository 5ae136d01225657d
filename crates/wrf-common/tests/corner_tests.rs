//! Tests for corner box resolution and plane extents.

use wrf_common::{CoordGrid, CoordPair, CornerBox, CornerError, CornerInput, Extent};

fn lat_grid() -> CoordGrid {
    // 3 x 2 domain, rows run south to north
    CoordGrid::from_rows(&[vec![30.0, 30.2, 30.4], vec![31.0, 31.2, 31.4]]).unwrap()
}

fn lon_grid() -> CoordGrid {
    CoordGrid::from_rows(&[vec![-100.0, -99.0, -98.0], vec![-100.2, -99.1, -97.9]]).unwrap()
}

// ============================================================================
// Corner resolution tests
// ============================================================================

#[test]
fn test_corners_from_points() {
    let corners = CornerBox::try_from(CornerInput::corners(
        CoordPair::new(30.0, -100.0),
        CoordPair::new(31.4, -97.9),
    ))
    .unwrap();

    assert_eq!(corners.ll_lat(), 30.0);
    assert_eq!(corners.ll_lon(), -100.0);
    assert_eq!(corners.ur_lat(), 31.4);
    assert_eq!(corners.ur_lon(), -97.9);
}

#[test]
fn test_corners_from_grids_use_first_and_last() {
    let corners = CornerInput::grids(lat_grid(), lon_grid()).resolve().unwrap();

    assert_eq!(corners.bottom_left, CoordPair::new(30.0, -100.0));
    assert_eq!(corners.top_right, CoordPair::new(31.4, -97.9));
}

#[test]
fn test_grids_and_points_agree() {
    let from_grids = CornerInput::grids(lat_grid(), lon_grid()).resolve().unwrap();
    let from_points = CornerInput::corners(from_grids.bottom_left, from_grids.top_right)
        .resolve()
        .unwrap();
    assert_eq!(from_grids, from_points);
}

#[test]
fn test_no_corner_source_fails() {
    let err = CornerInput::default().resolve().unwrap_err();
    assert_eq!(err, CornerError::Missing);
    assert!(err.to_string().contains("invalid corner point arguments"));
}

#[test]
fn test_only_top_right_fails() {
    let input = CornerInput {
        top_right: Some(CoordPair::new(31.4, -97.9)),
        ..Default::default()
    };
    assert_eq!(input.resolve(), Err(CornerError::Missing));
}

#[test]
fn test_points_plus_one_grid_is_ambiguous() {
    let input = CornerInput {
        bottom_left: Some(CoordPair::new(30.0, -100.0)),
        top_right: Some(CoordPair::new(31.4, -97.9)),
        lats: Some(lat_grid()),
        lons: None,
    };
    assert_eq!(input.resolve(), Err(CornerError::Ambiguous));
}

#[test]
fn test_empty_longitude_grid() {
    let empty = CoordGrid::new(0, 0, Vec::new()).unwrap();
    let input = CornerInput::grids(lat_grid(), empty);
    assert_eq!(input.resolve(), Err(CornerError::EmptyGrid("longitude")));
}

// ============================================================================
// Extent tests
// ============================================================================

#[test]
fn test_extent_dimensions() {
    let extent = Extent::new([-2.0e6, 2.5e6], [-1.0e6, 1.0e6]);
    assert_eq!(extent.width(), 4.5e6);
    assert_eq!(extent.height(), 2.0e6);
}

#[test]
fn test_extent_contains_point() {
    let extent = Extent::new([10.0, 30.0], [-5.0, 5.0]);
    assert!(extent.contains_point(20.0, 0.0));
    assert!(extent.contains_point(10.0, 5.0));
    assert!(!extent.contains_point(31.0, 0.0));
}

#[test]
fn test_extent_contains_point_reversed_limits() {
    // Corner-ordered limits may run high to low for flipped domains
    let extent = Extent::new([30.0, 10.0], [5.0, -5.0]);
    assert!(extent.contains_point(20.0, 0.0));
    assert!(!extent.contains_point(0.0, 0.0));
}

#[test]
fn test_extent_serializes() {
    let extent = Extent::new([1.0, 2.0], [3.0, 4.0]);
    let json = serde_json::to_string(&extent).unwrap();
    assert_eq!(json, r#"{"x_limits":[1.0,2.0],"y_limits":[3.0,4.0]}"#);
}
