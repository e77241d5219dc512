mod canvas;
mod error;
pub mod geometry;
pub mod shape;

pub use canvas::Canvas;
pub use error::CanvasError;
pub use geometry::{taxel, Taxel};
pub use shape::{combine, render, Rect, Rotation};
