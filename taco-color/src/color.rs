use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ColorError;

#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

pub fn as_index(c: &sRGB) -> usize {
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c)).to_uppercase()
}

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid regex")
});

/// Parses `#RRGGBB` (the leading `#` is optional, case does not matter).
pub fn parse_hex(s: &str) -> Result<sRGB, ColorError> {
    let invalid = || ColorError::InvalidHex(s.to_string());
    let caps = HEX_COLOR.captures(s.trim()).ok_or_else(invalid)?;
    let mut out: sRGB = [0; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&caps[i + 1], 16).map_err(|_| invalid())?;
    }
    Ok(out)
}

/// HSV color. Hue in degrees `[0, 360)`, saturation and value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Checked constructor. Struct literals skip the range check, and the
    /// taxel encoder accepts whatever it is given.
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self, ColorError> {
        if !(h.is_finite() && (0.0..360.0).contains(&h)) {
            return Err(ColorError::OutOfRange {
                component: "hue",
                value: h,
                range: "[0, 360)",
            });
        }
        for (component, value) in [("saturation", s), ("value", v)] {
            if !(value.is_finite() && (0.0..=100.0).contains(&value)) {
                return Err(ColorError::OutOfRange {
                    component,
                    value,
                    range: "[0, 100]",
                });
            }
        }
        Ok(Self { h, s, v })
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}, {})", self.h, self.s, self.v)
    }
}

// Channels scaled to [0, 1]; no gamma decoding, HSV is defined on the encoded values.
#[derive(Debug)]
struct RGB {
    r: f64,
    g: f64,
    b: f64,
}

impl From<sRGB> for RGB {
    fn from(c: sRGB) -> Self {
        RGB {
            r: c[0] as f64 / 255.0,
            g: c[1] as f64 / 255.0,
            b: c[2] as f64 / 255.0,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl From<RGB> for Hsv {
    fn from(c: RGB) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;

        let v = max * 100.0;
        let s = if max == 0.0 { 0.0 } else { (1.0 - min / max) * 100.0 };

        // hue is undefined for greys, pin it to 0
        let h = if delta == 0.0 {
            0.0
        } else if max == c.r {
            (60.0 * (c.g - c.b) / delta + 360.0).rem_euclid(360.0)
        } else if max == c.g {
            60.0 * (c.b - c.r) / delta + 120.0
        } else {
            60.0 * (c.r - c.g) / delta + 240.0
        };

        Hsv {
            h: round2(h),
            s: round2(s),
            v: round2(v),
        }
    }
}

impl From<sRGB> for Hsv {
    fn from(c: sRGB) -> Self {
        Into::<RGB>::into(c).into()
    }
}

pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    [r, g, b].into()
}
