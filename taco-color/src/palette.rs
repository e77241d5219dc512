//! Named Pantone swatches, stored as their published sRGB hex values.

use once_cell::sync::Lazy;

use crate::color::{parse_hex, Hsv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pantone {
    BrightRed,
    Orange021,
    Yellow,
    Green,
    ProcessBlue,
    Blue072,
    Violet,
    Purple,
    Magenta0521,
    Black,
    CoolGray6,
    WarmGray6,
}

impl Pantone {
    pub const ALL: [Pantone; 12] = [
        Pantone::BrightRed,
        Pantone::Orange021,
        Pantone::Yellow,
        Pantone::Green,
        Pantone::ProcessBlue,
        Pantone::Blue072,
        Pantone::Violet,
        Pantone::Purple,
        Pantone::Magenta0521,
        Pantone::Black,
        Pantone::CoolGray6,
        Pantone::WarmGray6,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pantone::BrightRed => "brightred",
            Pantone::Orange021 => "orange021",
            Pantone::Yellow => "yellow",
            Pantone::Green => "green",
            Pantone::ProcessBlue => "processblue",
            Pantone::Blue072 => "blue072",
            Pantone::Violet => "violet",
            Pantone::Purple => "purple",
            Pantone::Magenta0521 => "magenta0521",
            Pantone::Black => "black",
            Pantone::CoolGray6 => "coolgray6",
            Pantone::WarmGray6 => "warmgray6",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Pantone::BrightRed => "#F9423A",
            Pantone::Orange021 => "#FE5000",
            Pantone::Yellow => "#FEDD00",
            Pantone::Green => "#00AB84",
            Pantone::ProcessBlue => "#0085CA",
            Pantone::Blue072 => "#10069F",
            Pantone::Violet => "#440099",
            Pantone::Purple => "#BB29BB",
            Pantone::Magenta0521 => "#F1B2DC",
            Pantone::Black => "#2D2926",
            Pantone::CoolGray6 => "#A7A8AA",
            Pantone::WarmGray6 => "#ACA39A",
        }
    }

    pub fn hsv(self) -> Hsv {
        HSV_TABLE[self as usize]
    }
}

static HSV_TABLE: Lazy<[Hsv; 12]> = Lazy::new(|| {
    Pantone::ALL.map(|p| {
        // every entry in `hex` is a literal checked by the tests below
        parse_hex(p.hex()).map(Hsv::from).unwrap_or_default()
    })
});

pub fn names() -> impl Iterator<Item = &'static str> {
    Pantone::ALL.iter().map(|p| p.name())
}

pub fn get(name: &str) -> Option<Hsv> {
    Pantone::ALL
        .iter()
        .find(|p| p.name().eq_ignore_ascii_case(name))
        .map(|p| p.hsv())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_every_entry_parses() {
        for p in Pantone::ALL {
            assert!(parse_hex(p.hex()).is_ok(), "{}", p.name());
            assert_eq!(Pantone::ALL[p as usize], p);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(names().count(), 12);
        assert_eq!(get("yellow"), Some(Pantone::Yellow.hsv()));
        assert_eq!(get("ProcessBlue"), Some(Pantone::ProcessBlue.hsv()));
        assert_eq!(get("chartreuse"), None);
    }

    #[test]
    fn test_known_conversions() {
        let orange = Pantone::Orange021.hsv();
        assert_abs_diff_eq!(orange.s, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(orange.v, 99.61, epsilon = 1e-9);
        assert_abs_diff_eq!(orange.h, 18.9, epsilon = 1e-9);

        let grey = Pantone::CoolGray6.hsv();
        assert!(grey.s < 3.0);
    }
}
