//! Taxel geometry.
//!
//! A taxel encodes one HSV color as two rounded bars. The lower "base" bar
//! gets taller as the value drops. The upper "hue" bar is as wide as the
//! saturation and is rotated by half the hue, so the full hue circle sweeps
//! 180 degrees. Its rotation center sits near its right end, which lines up
//! with the right edge of the base bar.

use taco_color::Hsv;

use crate::shape::{combine, render, round3, Rect, Rotation};

// Hue bar [mm]
pub const HUE_WIDTH: f64 = 4.5;
pub const HUE_HEIGHT: f64 = 0.6;
pub const HUE_CORNER_RADIUS: f64 = HUE_HEIGHT / 2.0;

// Base bar [mm]
pub const BASE_WIDTH: f64 = 4.5;
pub const BASE_HEIGHT_MIN: f64 = 0.8;
pub const BASE_HEIGHT_MAX: f64 = 4.5;
pub const BASE_CORNER_RADIUS: f64 = BASE_HEIGHT_MIN / 2.0;

/// Gap between the base bar and the hue bar [mm].
pub const EPS: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Taxel {
    /// Top-left corner of the base bar.
    pub x: f64,
    pub y: f64,
    pub color: Hsv,
    /// `None` when degenerate, e.g. at zero saturation.
    pub hue_bar: Option<Rect>,
    pub base_bar: Option<Rect>,
}

impl Taxel {
    pub fn render(&self) -> Option<String> {
        combine(
            self.hue_bar.as_ref().and_then(render),
            self.base_bar.as_ref().and_then(render),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.hue_bar.is_none() && self.base_bar.is_none()
    }
}

/// Builds the taxel for `hsv` with the base bar's top-left corner at `(x, y)`.
///
/// The color is not range checked; out-of-range components give odd but
/// finite geometry, or drop a bar if it ends up with no area.
pub fn taxel(x: f64, y: f64, hsv: Hsv) -> Taxel {
    let hueline_width = hsv.s / 100.0 * HUE_WIDTH;
    let hueline_angle = hsv.h / 2.0;
    let center = Rotation {
        angle: hueline_angle,
        cx: round3(hueline_width - HUE_HEIGHT / 2.0),
        cy: round3(HUE_HEIGHT / 2.0),
    };
    // (100 - value), so darker colors get the taller bar
    let baseline_height =
        BASE_HEIGHT_MIN + (100.0 - hsv.v) / 100.0 * (BASE_HEIGHT_MAX - BASE_HEIGHT_MIN);

    let hue_bar = Rect::new(
        x + (HUE_WIDTH - hueline_width),
        y - HUE_HEIGHT - EPS,
        hueline_width,
        HUE_HEIGHT,
        HUE_CORNER_RADIUS,
    )
    .rotated(center);

    let base_bar = Rect::new(x, y, BASE_WIDTH, baseline_height, BASE_CORNER_RADIUS);

    Taxel {
        x,
        y,
        color: hsv,
        hue_bar: hue_bar.checked(),
        base_bar: base_bar.checked(),
    }
}
