//! HSV color with degree hue and unit saturation/value
//!
//! `smart_leds` only ships an 8-bit HSV flavour, so the light engine carries
//! its own representation matching the 0..360 / 0.0..1.0 ranges commands use.

use libm::{fabsf, fmodf, roundf};

use crate::color::Rgb;

/// Number of degrees in the hue circle
pub const HUE_DEGREES: u16 = 360;

/// Degrees in a single hue sextant
const SEXTANT_DEGREES: u16 = 60;

/// HSV triple
///
/// Construct with [`Hsv::new`] to get normalized components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `0..360`
    pub hue: u16,
    /// Saturation, `0.0..=1.0`
    pub sat: f32,
    /// Value, `0.0..=1.0`
    pub val: f32,
}

impl Hsv {
    /// Create a normalized HSV color
    ///
    /// Hue wraps around the circle, saturation and value are clamped to the
    /// unit range. `NaN` components are treated as zero.
    pub fn new(hue: u16, sat: f32, val: f32) -> Self {
        Self {
            hue: hue % HUE_DEGREES,
            sat: unit(sat),
            val: unit(val),
        }
    }
}

impl Default for Hsv {
    /// White
    fn default() -> Self {
        Self {
            hue: 0,
            sat: 0.0,
            val: 1.0,
        }
    }
}

fn unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Convert HSV to RGB using the hue-sextant method
///
/// Hue 0 lands in the first sextant, so `(0, 1.0, 1.0)` is pure red.
#[allow(clippy::many_single_char_names)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let hsv = Hsv::new(hsv.hue, hsv.sat, hsv.val);
    let sector = f32::from(hsv.hue) / f32::from(SEXTANT_DEGREES);

    let c = hsv.val * hsv.sat;
    let x = c * (1.0 - fabsf(fmodf(sector, 2.0) - 1.0));
    let m = hsv.val - c;

    let (r, g, b) = match hsv.hue / SEXTANT_DEGREES {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: to_channel(r + m),
        g: to_channel(g + m),
        b: to_channel(b + m),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(component: f32) -> u8 {
    roundf(component * 255.0).clamp(0.0, 255.0) as u8
}
