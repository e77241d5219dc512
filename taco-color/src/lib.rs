pub mod color;
mod error;
pub mod palette;

pub use color::{parse_hex, rgb_to_hsv, sRGB, to_string, Hsv};
pub use error::ColorError;
