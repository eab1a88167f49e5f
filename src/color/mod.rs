mod hsv;
mod model;
pub mod presets;

pub use hsv::{HUE_DEGREES, Hsv, hsv2rgb};
pub use model::ColorModel;
use smart_leds::RGB8;

pub type Rgb = RGB8;
