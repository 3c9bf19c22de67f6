use crate::core::constants::{H_BASE, MAX_LEVEL, lattice_slope};
use crate::core::projection::{mercator_to_wgs84, wgs84_to_mercator};
use crate::util::coord::Coordinate;
use crate::util::error::GeoHexError;
use geo_types::Point;

/// Hex size in Mercator meters at the given level.
///
/// Cells shrink by a factor of 3 per level increment.
pub fn hex_size(level: u8) -> f64 {
    H_BASE / 3f64.powi(level as i32 + 3)
}

/// Widest valid index difference `3^(level + 2)` at the given level.
pub(crate) fn max_steps(level: u8) -> i64 {
    3i64.pow(level as u32 + 2)
}

pub(crate) fn check_level(level: u8) -> Result<(), GeoHexError> {
    if level > MAX_LEVEL {
        return Err(GeoHexError::InvalidLevel(level));
    }
    Ok(())
}

/// Resolves a lon/lat location to the grid indices of the cell containing
/// it at the given level.
pub fn point_to_xy<C: Coordinate>(coord: &C, level: u8) -> Result<(i64, i64), GeoHexError> {
    check_level(level)?;

    let size = hex_size(level);
    let p = wgs84_to_mercator(coord);
    let k = lattice_slope();
    let unit_x = 6.0 * size;
    let unit_y = 6.0 * size * k;
    let pos_x = (p.x() + p.y() / k) / unit_x;
    let pos_y = (p.y() - k * p.x()) / unit_y;

    let x0 = pos_x.floor();
    let y0 = pos_y.floor();
    let qx = pos_x - x0;
    let qy = pos_y - y0;
    let mut x = pos_x.round();
    let mut y = pos_y.round();

    // Naive rounding misassigns two slivers of the skewed unit rhombus;
    // reassign by the fractional position.
    if qy > -qx + 1.0 {
        if qy < 2.0 * qx && qy > 0.5 * qx {
            x = x0 + 1.0;
            y = y0 + 1.0;
        }
    } else if qy < -qx + 1.0 && qy > 2.0 * qx - 1.0 && qy < 0.5 * qx + 0.5 {
        x = x0;
        y = y0;
    }

    let (x, y, _) = adjust_xy(x as i64, y as i64, level)?;
    Ok((x, y))
}

/// Center of the cell at (x, y), as lon/lat degrees.
///
/// Cells sitting exactly on the antimeridian seam (`|x - y| == 3^(level+2)`)
/// report longitude -180 as the canonical side.
pub fn xy_to_center(x: i64, y: i64, level: u8) -> Result<Point<f64>, GeoHexError> {
    check_level(level)?;

    let size = hex_size(level);
    let k = lattice_slope();
    let unit_x = 6.0 * size;
    let unit_y = 6.0 * size * k;

    let lat_m = (k * x as f64 * unit_x + y as f64 * unit_y) / 2.0;
    let lon_m = (lat_m - y as f64 * unit_y) / k;
    let loc = mercator_to_wgs84(&Point::new(lon_m, lat_m));

    if (x as i128 - y as i128).abs() == max_steps(level) as i128 {
        return Ok(Point::new(-180.0, loc.y()));
    }
    Ok(loc)
}

/// Folds indices whose difference exceeds `3^(level + 2)` back into the
/// grid's valid span, redistributing the overflow between x and y.
///
/// Returns the adjusted pair and whether a pure seam swap occurred. One
/// application reduces the difference by `2 * 3^(level + 2)`, which
/// normalizes every pair the resolver can produce.
pub fn adjust_xy(x: i64, y: i64, level: u8) -> Result<(i64, i64, bool), GeoHexError> {
    check_level(level)?;

    let max = max_steps(level) as i128;
    let mut x = x as i128;
    let mut y = y as i128;
    let steps = (x - y).abs();
    let mut reversed = false;

    if steps == max && x > y {
        std::mem::swap(&mut x, &mut y);
        reversed = true;
    } else if steps > max {
        let dif = steps - max;
        let dif_x = dif / 2;
        let dif_y = dif - dif_x;
        if x > y {
            let mut edge_x = x - dif_x;
            let mut edge_y = y + dif_y;
            std::mem::swap(&mut edge_x, &mut edge_y);
            x = edge_x + dif_x;
            y = edge_y - dif_y;
        } else {
            let mut edge_x = x + dif_x;
            let mut edge_y = y - dif_y;
            std::mem::swap(&mut edge_x, &mut edge_y);
            x = edge_x - dif_x;
            y = edge_y + dif_y;
        }
    }

    Ok((x as i64, y as i64, reversed))
}
