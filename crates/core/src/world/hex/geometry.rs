//! Projections from grid coordinates into world space. All of these are pure
//! functions of their inputs and the tile size constants below.

use crate::world::hex::AxialPoint;
use nalgebra::Point3;

/// Distance from the center of a tile to any of its corners, in world units.
/// This is also the length of one side of the tile.
pub const HEX_RADIUS: f64 = 1.0;
/// Distance between the top and bottom corners of a tile
pub const HEX_HEIGHT: f64 = HEX_RADIUS * 2.0;
/// Distance between two opposite sides of a tile
pub const HEX_WIDTH: f64 = HEX_RADIUS * 1.732_050_807_568_877_2; // sqrt(3)
/// Distance along x between the centers of two tiles in the same row
pub const HORIZONTAL_SPACING: f64 = HEX_WIDTH;
/// Distance along z between the centers of two adjacent rows
pub const VERTICAL_SPACING: f64 = HEX_HEIGHT * 0.75;

/// World-space center of a tile, on the plane `y = 0`. This is the standard
/// axial-to-cartesian projection for pointy topped tiles.
pub fn position(point: AxialPoint) -> Point3<f64> {
    project(point.q().into(), point.r().into())
}

/// World-space center of a tile as if the map were repeated once to the
/// west, i.e. with `q` shifted back by one map width. Comparing this against
/// [position] is how distances across the map seam are measured.
pub fn mirrored_position(point: AxialPoint, columns: u16) -> Point3<f64> {
    project(f64::from(point.q()) - f64::from(columns), point.r().into())
}

/// World-space center of a tile, shifted by whole map widths so that it is
/// the copy of the tile closest to the camera. This is what a renderer uses
/// to make the map appear to wrap around endlessly as the camera pans. Only
/// the camera's `x` matters, since the map doesn't wrap vertically.
pub fn position_from_camera(
    point: AxialPoint,
    camera: &Point3<f64>,
    columns: u16,
) -> Point3<f64> {
    let map_width = f64::from(columns) * HORIZONTAL_SPACING;
    let mut position = position(point);

    // Round away from zero to the nearest number of whole map widths
    let widths_from_camera = (position.x - camera.x) / map_width;
    let widths_to_fix = if widths_from_camera > 0.0 {
        widths_from_camera + 0.5
    } else {
        widths_from_camera - 0.5
    }
    .trunc();

    position.x -= widths_to_fix * map_width;
    position
}

fn project(q: f64, r: f64) -> Point3<f64> {
    Point3::new(
        HORIZONTAL_SPACING * (q + r / 2.0),
        0.0,
        VERTICAL_SPACING * r,
    )
}
