//! Rainbow hue rotation

use super::{Effect, Frame};
use crate::color::HUE_DEGREES;

/// Hue the cycle restarts from after a full turn
const HUE_RESTART: u16 = 1;

/// Rotates the fixture hue by one degree per tick
///
/// The cycle visits 1..=359 and then restarts at 1, so hue 0 is only ever
/// the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RainbowEffect {
    hue: u16,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }

    /// Last hue written to the fixture
    pub const fn hue(&self) -> u16 {
        self.hue
    }
}

impl Effect for RainbowEffect {
    fn step(&mut self, frame: &mut Frame<'_>) {
        self.hue += 1;
        if self.hue >= HUE_DEGREES {
            self.hue = HUE_RESTART;
        }
        frame.color.set_hsv(self.hue, 1.0, 1.0);
    }
}
