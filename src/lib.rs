//! # geohex-rs
//!
//! A Rust implementation of the GeoHex v3.2 geocoding scheme: a
//! deterministic, reversible mapping between lon/lat locations and a fixed
//! hexagonal tiling of the Earth's spherical Web-Mercator plane. Each cell
//! is identified by a short alphanumeric code whose length encodes the
//! resolution level.
//!
//! ### 1. `Zone` - resolving cells
//!
//! ```
//! use geohex_rs::Zone;
//!
//! # fn main() -> Result<(), geohex_rs::GeoHexError> {
//! let zone = Zone::from_location(&(139.745433, 35.65858), 11)?;
//! assert_eq!(zone.code, "XM48854457273");
//!
//! let restored = Zone::from_code("XM48854457273")?;
//! assert_eq!((restored.x, restored.y), (912000, -325774));
//!
//! let polygon = zone.to_polygon();
//! assert_eq!(polygon.exterior().coords().count(), 7);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Grid and codec primitives
//!
//! The lower-level pieces are exported for callers that only need indices
//! or codes:
//!
//! ```
//! use geohex_rs::{decode_code, generate_code, point_to_xy};
//!
//! # fn main() -> Result<(), geohex_rs::GeoHexError> {
//! let (x, y) = point_to_xy(&(139.745433, 35.65858), 11)?;
//! let code = generate_code(x, y, 11)?;
//! assert_eq!(decode_code(&code)?, (x, y, 11));
//! # Ok(())
//! # }
//! ```
//!
//! Everything is a pure function over immutable values: no state, no I/O,
//! safe to call from any number of threads.

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::Zone;
pub use crate::core::{
    CODE_ALPHABET, H_BASE, MAX_LEVEL, adjust_xy, decode_code, generate_code, hex_size,
    mercator_to_wgs84, point_to_xy, wgs84_to_mercator, xy_to_center,
};
pub use crate::util::{Coordinate, GeoHexError};

pub use geo_types;
