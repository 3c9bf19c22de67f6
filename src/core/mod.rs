pub mod codec;
pub mod constants;
pub mod grid;
pub mod projection;

pub use codec::{decode_code, generate_code};
pub use constants::{CODE_ALPHABET, H_BASE, MAX_LEVEL};
pub use grid::{adjust_xy, hex_size, point_to_xy, xy_to_center};
pub use projection::{mercator_to_wgs84, wgs84_to_mercator};
