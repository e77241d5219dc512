/// Rotation about a point given relative to the rectangle's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Degrees.
    pub angle: f64,
    pub cx: f64,
    pub cy: f64,
}

/// One rounded rectangle, all lengths in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub rotation: Option<Rotation>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, rx: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx,
            rotation: None,
        }
    }

    pub fn rotated(self, rotation: Rotation) -> Self {
        Self {
            rotation: Some(rotation),
            ..self
        }
    }

    /// Width, height and corner radius all strictly positive.
    pub fn is_renderable(&self) -> bool {
        [self.width, self.height, self.rx].iter().all(|&v| v > 0.0)
    }

    /// `Some(self)` if renderable, otherwise `None`.
    pub fn checked(self) -> Option<Self> {
        Some(self).filter(Rect::is_renderable)
    }
}

pub(crate) fn round3(x: f64) -> f64 {
    // adding zero turns -0.0 into 0.0 so it never prints as "-0"
    (x * 1000.0).round() / 1000.0 + 0.0
}

fn num(x: f64) -> String {
    round3(x).to_string()
}

/// Serializes `rect` as an SVG `<rect>` element, or `None` if it is degenerate.
pub fn render(rect: &Rect) -> Option<String> {
    if !rect.is_renderable() {
        return None;
    }

    let mut src = format!(
        "<rect x=\"{}\" y=\"{}\"\n      width=\"{}\" height=\"{}\"\n      rx=\"{}\"\n",
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        num(rect.rx),
    );

    if let Some(rot) = rect.rotation {
        // the center is anchored to the coordinates as printed, not the raw ones
        src += &format!(
            "      transform=\"rotate({} {} {})\"\n",
            num(rot.angle),
            num(round3(rect.x) + rot.cx),
            num(round3(rect.y) + rot.cy),
        );
    }

    src.push_str("/>");
    Some(src)
}

/// Joins two optional fragments with a line break. The separator only
/// appears when both sides are present.
pub fn combine(a: Option<String>, b: Option<String>) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + "\n" + &b),
        (a, b) => a.or(b),
    }
}
