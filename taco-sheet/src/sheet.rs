use std::path::Path;

use itertools::Itertools;
use log::debug;
use rand::Rng;
use taco_color::palette::Pantone;
use taco_color::Hsv;
use taco_svg::{taxel, Canvas};

// Grid pitch [mm]
pub const PADDING_X: f64 = 2.0;
pub const PADDING_Y: f64 = 5.5;
pub const GRID_X: f64 = 10.0;
pub const GRID_Y: f64 = 11.0;

/// Extra space between the fixed swatches and the random ones [mm].
pub const RANDOM_GAP_Y: f64 = 4.0;

pub const CARD_SIZE: f64 = 50.0;

pub const CARD_LAYOUT: [[Pantone; 3]; 4] = [
    [Pantone::BrightRed, Pantone::Orange021, Pantone::Yellow],
    [Pantone::Green, Pantone::ProcessBlue, Pantone::Blue072],
    [Pantone::Violet, Pantone::Purple, Pantone::Magenta0521],
    [Pantone::Black, Pantone::CoolGray6, Pantone::WarmGray6],
];

pub type ColorMatrix = Vec<Vec<Hsv>>;

fn hues() -> impl Iterator<Item = f64> + Clone {
    (0..=320).step_by(40).map(|h| h as f64)
}

fn hsv(h: f64, s: f64, v: f64) -> Hsv {
    Hsv { h, s, v }
}

/// Hue against saturation, then hue against value, with a grey ramp as the
/// last column.
pub fn swatch_matrix() -> ColorMatrix {
    let by_saturation = (20..=100)
        .step_by(20)
        .map(|s| hues().map(|h| hsv(h, s as f64, 100.0)).collect_vec());
    let by_value = (20..=80)
        .rev()
        .step_by(20)
        .map(|v| hues().map(|h| hsv(h, 100.0, v as f64)).collect_vec());

    let rows = by_saturation.chain(by_value).collect_vec();
    let grey_step = 100 / (rows.len() - 1);
    rows.into_iter()
        .zip((0..=100).rev().step_by(grey_step))
        .map(|(mut row, v)| {
            row.push(hsv(0.0, 0.0, v as f64));
            row
        })
        .collect()
}

/// Two rows of random saturation and value across the hue range, shown twice.
pub fn random_matrix<R: Rng>(rng: &mut R) -> ColorMatrix {
    let rows = (0..2)
        .map(|_| {
            hues()
                .map(|h| {
                    let s = 20 * rng.gen_range(1..=5);
                    let v = rng.gen_range(0..=100);
                    hsv(h, s as f64, v as f64)
                })
                .collect_vec()
        })
        .collect_vec();
    rows.iter().cycle().take(2 * rows.len()).cloned().collect()
}

pub fn card_matrix() -> ColorMatrix {
    CARD_LAYOUT
        .iter()
        .map(|row| row.iter().map(|p| p.hsv()).collect())
        .collect()
}

/// Anchor of the taxel in `(col, row)`, shifted down by `offset_y`.
pub fn cell(col: usize, row: usize, offset_y: f64) -> (f64, f64) {
    (
        PADDING_X + GRID_X * col as f64,
        offset_y + PADDING_Y + GRID_Y * row as f64,
    )
}

pub fn sheet_size(cols: usize, rows: usize) -> (f64, f64) {
    (
        2.0 * PADDING_X + GRID_X * cols as f64,
        2.0 * PADDING_Y + GRID_Y * rows as f64,
    )
}

/// Draws `matrix` starting at grid row `first_row`.
pub fn lay_out(canvas: &mut Canvas, matrix: &ColorMatrix, first_row: usize, offset_y: f64) {
    for (row, colors) in matrix.iter().enumerate() {
        for (col, color) in colors.iter().enumerate() {
            let (x, y) = cell(col, first_row + row, offset_y);
            canvas.add(&taxel(x, y, *color));
        }
    }
}

pub fn swatch_sheet<R: Rng, P: AsRef<Path>>(rng: &mut R, filename: P) -> Canvas {
    let fixed = swatch_matrix();
    let random = random_matrix(rng);

    let cols = fixed[0].len();
    let (width, height) = sheet_size(cols, fixed.len() + random.len());
    let mut canvas = Canvas::with_filename(width, height, filename);

    lay_out(&mut canvas, &fixed, 0, 0.0);
    lay_out(&mut canvas, &random, fixed.len(), RANDOM_GAP_Y);
    debug!(
        "swatch sheet: {}x{} mm, {} taxels",
        width,
        height,
        canvas.len()
    );
    canvas
}

pub fn palette_card<P: AsRef<Path>>(filename: P) -> Canvas {
    let mut canvas = Canvas::with_filename(CARD_SIZE, CARD_SIZE, filename);
    lay_out(&mut canvas, &card_matrix(), 0, 0.0);
    debug!("palette card: {} taxels", canvas.len());
    canvas
}
