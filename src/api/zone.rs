use crate::core::codec::{decode_code, generate_code};
use crate::core::grid::{hex_size, point_to_xy, xy_to_center};
use crate::core::projection::{mercator_to_wgs84, wgs84_to_mercator};
use crate::util::coord::Coordinate;
use crate::util::error::GeoHexError;
use geo_types::{Coord, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A resolved GeoHex cell.
///
/// Binds the cell's code, center location, grid indices and level, with the
/// hexagon geometry derived on demand. Zones are plain immutable values.
///
/// # Example
///
/// ```
/// use geohex_rs::Zone;
///
/// # fn main() -> Result<(), geohex_rs::GeoHexError> {
/// // Resolve a location (lon/lat order, like geo-types).
/// let zone = Zone::from_location(&(139.745433, 35.65858), 11)?;
/// assert_eq!(zone.code, "XM48854457273");
///
/// // Restore the same cell from its code.
/// let restored = Zone::from_code(&zone.code)?;
/// assert_eq!(restored, zone);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Alphanumeric cell code; its length is `level + 2`.
    pub code: String,
    /// Cell center in lon/lat degrees.
    pub center: Point<f64>,
    /// Grid resolution of this cell.
    pub level: u8,
    /// Lattice x index.
    pub x: i64,
    /// Lattice y index.
    pub y: i64,
}

impl Zone {
    /// Resolve the cell containing a lon/lat location at the given level.
    ///
    /// # Example
    /// ```
    /// use geohex_rs::Zone;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohex_rs::GeoHexError> {
    /// // From a tuple
    /// let zone = Zone::from_location(&(139.745433, 35.65858), 11)?;
    /// // From a Point
    /// let zone = Zone::from_location(&Point::new(139.745433, 35.65858), 11)?;
    /// assert_eq!((zone.x, zone.y), (912000, -325774));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_location(coord: &impl Coordinate, level: u8) -> Result<Self, GeoHexError> {
        let (x, y) = point_to_xy(coord, level)?;
        Self::from_xy(x, y, level)
    }

    /// Restore a cell from its code.
    ///
    /// # Example
    /// ```
    /// use geohex_rs::Zone;
    ///
    /// # fn main() -> Result<(), geohex_rs::GeoHexError> {
    /// let zone = Zone::from_code("XM48854457273")?;
    /// assert_eq!((zone.x, zone.y), (912000, -325774));
    /// assert_eq!(zone.level, 11);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, GeoHexError> {
        let (x, y, level) = decode_code(code)?;
        Self::from_xy(x, y, level)
    }

    /// Build the cell at the given grid indices.
    ///
    /// The indices are stored as passed; only the code and center are
    /// seam-normalized, so the twin representations of an antimeridian cell
    /// keep their own x/y while sharing a code.
    pub fn from_xy(x: i64, y: i64, level: u8) -> Result<Self, GeoHexError> {
        let center = xy_to_center(x, y, level)?;
        let code = generate_code(x, y, level)?;
        Ok(Self {
            code,
            center,
            level,
            x,
            y,
        })
    }

    /// Longitude of the cell center in degrees.
    pub fn lon(&self) -> f64 {
        self.center.x()
    }

    /// Latitude of the cell center in degrees.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Hex size in Mercator meters at this cell's level.
    pub fn hex_size(&self) -> f64 {
        hex_size(self.level)
    }

    /// The six boundary vertices in lon/lat degrees, clockwise from the
    /// leftmost corner.
    pub fn hex_coords(&self) -> [Point<f64>; 6] {
        let p = wgs84_to_mercator(&self.center);
        let size = self.hex_size();
        let rise = (PI * (60.0 / 180.0)).tan() * size;

        let top = mercator_to_wgs84(&Point::new(p.x(), p.y() + rise)).y();
        let btm = mercator_to_wgs84(&Point::new(p.x(), p.y() - rise)).y();
        let l = mercator_to_wgs84(&Point::new(p.x() - 2.0 * size, p.y())).x();
        let r = mercator_to_wgs84(&Point::new(p.x() + 2.0 * size, p.y())).x();
        let cl = mercator_to_wgs84(&Point::new(p.x() - size, p.y())).x();
        let cr = mercator_to_wgs84(&Point::new(p.x() + size, p.y())).x();
        let lat = self.lat();

        [
            Point::new(l, lat),
            Point::new(cl, top),
            Point::new(cr, top),
            Point::new(r, lat),
            Point::new(cr, btm),
            Point::new(cl, btm),
        ]
    }

    /// The cell boundary as a closed polygon, suitable for spatial
    /// operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let verts = self.hex_coords();
        let mut coords: Vec<Coord<f64>> = verts
            .iter()
            .map(|v| Coord { x: v.x(), y: v.y() })
            .collect();
        coords.push(coords[0]);
        Polygon::new(LineString::from(coords), vec![])
    }

    /// The cell as a GeoJSON feature: hexagon geometry with code, level and
    /// index properties, keyed by the code.
    pub fn to_geojson(&self) -> geojson::Feature {
        let geometry = geojson::Geometry::from(&self.to_polygon());

        let mut properties = geojson::JsonObject::new();
        properties.insert("code".into(), serde_json::Value::from(self.code.clone()));
        properties.insert("level".into(), serde_json::Value::from(self.level));
        properties.insert("x".into(), serde_json::Value::from(self.x));
        properties.insert("y".into(), serde_json::Value::from(self.y));

        geojson::Feature {
            bbox: None,
            geometry: Some(geometry),
            id: Some(geojson::feature::Id::String(self.code.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Contains;

    #[test]
    fn test_from_location() -> Result<(), GeoHexError> {
        let zone = Zone::from_location(&(139.745433, 35.65858), 11)?;

        assert_eq!(zone.code, "XM48854457273");
        assert_eq!((zone.x, zone.y), (912000, -325774));
        assert_eq!(zone.level, 11);
        assert!((zone.lat() - 35.658618718910624).abs() < 1e-9);
        assert!((zone.lon() - 139.7454091799466).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_from_code() -> Result<(), GeoHexError> {
        let zone = Zone::from_code("XM48854457273")?;

        assert_eq!(zone.level, 11);
        assert!((zone.hex_size() - 4.189345224692027).abs() < 1e-12);
        assert_eq!((zone.x, zone.y), (912000, -325774));
        assert!((zone.lat() - 35.658618718910624).abs() < 1e-9);
        assert!((zone.lon() - 139.7454091799466).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_from_xy() -> Result<(), GeoHexError> {
        let zone = Zone::from_xy(912000, -325774, 11)?;
        assert_eq!(zone.code, "XM48854457273");
        assert_eq!(zone, Zone::from_code(&zone.code)?);
        Ok(())
    }

    #[test]
    fn test_from_xy_keeps_caller_indices_on_seam() -> Result<(), GeoHexError> {
        let east = Zone::from_xy(9, 0, 0)?;
        let west = Zone::from_xy(0, 9, 0)?;

        assert_eq!(east.code, west.code);
        assert_eq!(east.lon(), -180.0);
        assert_eq!((east.x, east.y), (9, 0));
        assert_eq!((west.x, west.y), (0, 9));
        Ok(())
    }

    #[test]
    fn test_center_reencodes_to_nested_code() -> Result<(), GeoHexError> {
        // A cell's center, resolved at a finer level, lands in the middle
        // child: the finer code extends the coarser one.
        for &(lon, lat, level) in &[
            (139.745433, 35.65858, 0u8),
            (139.745433, 35.65858, 11),
            (-0.1278, 51.5074, 8),
            (-43.1729, -22.9068, 6),
            (151.207, -33.8675, 4),
        ] {
            let zone = Zone::from_location(&(lon, lat), level)?;
            let finer = Zone::from_location(&zone.center, zone.code.len() as u8)?;
            assert!(finer.code.starts_with(&zone.code));
        }
        Ok(())
    }

    #[test]
    fn test_hex_coords_shape() -> Result<(), GeoHexError> {
        let zone = Zone::from_location(&(139.745433, 35.65858), 11)?;
        let verts = zone.hex_coords();

        // Left and right corners sit on the center latitude; top and bottom
        // rows are symmetric around it.
        assert_eq!(verts[0].y(), zone.lat());
        assert_eq!(verts[3].y(), zone.lat());
        assert!(verts[1].y() > zone.lat());
        assert!(verts[2].y() > zone.lat());
        assert!(verts[4].y() < zone.lat());
        assert!(verts[5].y() < zone.lat());
        assert!(verts[0].x() < zone.lon());
        assert!(verts[3].x() > zone.lon());

        // Reference vertices for XM48854457273.
        assert!((verts[0].x() - 139.74533391288966).abs() < 1e-9);
        assert!((verts[1].y() - 35.65867168054057).abs() < 1e-9);
        assert!((verts[1].x() - 139.74537154641814).abs() < 1e-9);
        assert!((verts[4].y() - 35.65856575724554).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_polygon_is_closed_and_contains_center() -> Result<(), GeoHexError> {
        let zone = Zone::from_location(&(-0.1278, 51.5074), 9)?;
        let polygon = zone.to_polygon();

        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 7);
        assert_eq!(exterior.0[0], exterior.0[6]);
        assert!(polygon.contains(&zone.center));
        Ok(())
    }

    #[test]
    fn test_to_geojson() -> Result<(), GeoHexError> {
        let zone = Zone::from_location(&(139.745433, 35.65858), 7)?;
        let feature = zone.to_geojson();

        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties["code"], zone.code.as_str());
        assert_eq!(properties["level"], 7);
        assert!(matches!(
            feature.geometry.as_ref().unwrap().value,
            geojson::Value::Polygon(_)
        ));
        Ok(())
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), GeoHexError> {
        let zone = Zone::from_location(&(151.207, -33.8675), 6)?;
        let json = serde_json::to_string(&zone).unwrap();
        let back: Zone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, zone);
        Ok(())
    }
}
