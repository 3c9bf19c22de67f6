use geo_types::Point;

/// Coordinate access for the crate's entry points.
///
/// Geographic coordinates follow the geo-types convention: `x` is longitude,
/// `y` is latitude. Planar Mercator points use the same accessors with
/// meters.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
