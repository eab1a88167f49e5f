//! Preset colors of the stock 24-key IR remote
//!
//! Decoding the remote is up to the firmware; these are the colors its keys
//! select, plus the brightness step of its up/down keys.

use crate::color::Rgb;

/// Percent applied by a single brightness up/down key press
pub const BRIGHTNESS_STEP_PERCENT: i8 = 5;

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const GREEN: Rgb = rgb_from_u32(0x00_8000);
pub const NAVY: Rgb = rgb_from_u32(0x00_0080);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_4500);
pub const LIME_GREEN: Rgb = rgb_from_u32(0x32_CD32);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const GOLDEN_ROD: Rgb = rgb_from_u32(0xDA_A520);
pub const LIME: Rgb = rgb_from_u32(0x00_FF00);
pub const PURPLE: Rgb = rgb_from_u32(0x80_0080);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_A000);
pub const TEAL: Rgb = rgb_from_u32(0x00_8080);
pub const DODGER_BLUE: Rgb = rgb_from_u32(0x1E_90FF);
pub const YELLOW_GREEN: Rgb = rgb_from_u32(0x9A_CD32);
pub const SKY_BLUE: Rgb = rgb_from_u32(0x87_CEEB);
pub const BLUE_VIOLET: Rgb = rgb_from_u32(0x8A_2BE2);

/// Remote preset colors in key order (row by row, left to right)
pub const REMOTE_PRESETS: [Rgb; 16] = [
    RED,
    GREEN,
    NAVY,
    WHITE,
    ORANGE,
    LIME_GREEN,
    BLUE,
    GOLDEN_ROD,
    LIME,
    PURPLE,
    YELLOW,
    TEAL,
    DODGER_BLUE,
    YELLOW_GREEN,
    SKY_BLUE,
    BLUE_VIOLET,
];
