use crate::color::{Hsv, Rgb, hsv2rgb};

/// Current fixture color
///
/// RGB is the canonical representation: it is what gets rendered and what
/// gets reported. The HSV fields only record the last [`set_hsv`] call and
/// are not recomputed by [`set_rgb`], so they can be stale.
///
/// [`set_hsv`]: ColorModel::set_hsv
/// [`set_rgb`]: ColorModel::set_rgb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorModel {
    rgb: Rgb,
    hsv: Hsv,
}

impl ColorModel {
    pub const fn new(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsv: Hsv {
                hue: 0,
                sat: 0.0,
                val: 1.0,
            },
        }
    }

    /// Current RGB color
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// HSV from the last `set_hsv` call
    pub const fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Set RGB channels, leaving the HSV fields untouched
    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.rgb = Rgb { r, g, b };
    }

    /// Set HSV and overwrite RGB with its projection
    pub fn set_hsv(&mut self, hue: u16, sat: f32, val: f32) {
        self.hsv = Hsv::new(hue, sat, val);
        self.rgb = hsv2rgb(self.hsv);
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(Rgb {
            r: 255,
            g: 255,
            b: 255,
        })
    }
}
