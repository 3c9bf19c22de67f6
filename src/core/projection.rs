use crate::core::constants::H_BASE;
use crate::util::coord::Coordinate;
use geo_types::Point;
use std::f64::consts::PI;

/// Forward spherical Web-Mercator projection.
///
/// Takes a lon/lat coordinate in degrees and returns planar meters. The
/// domain is all finite reals; latitudes at the poles drive y toward
/// infinity, which callers must tolerate or reject.
pub fn wgs84_to_mercator<C: Coordinate>(coord: &C) -> Point<f64> {
    let x = coord.x() * H_BASE / 180.0;
    let y = ((90.0 + coord.y()) * PI / 360.0).tan().ln() / (PI / 180.0);
    Point::new(x, y * (H_BASE / 180.0))
}

/// Inverse spherical Web-Mercator projection, planar meters to lon/lat
/// degrees.
pub fn mercator_to_wgs84<C: Coordinate>(coord: &C) -> Point<f64> {
    let lon = (coord.x() / H_BASE) * 180.0;
    let lat = (coord.y() / H_BASE) * 180.0;
    let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
    Point::new(lon, lat)
}
