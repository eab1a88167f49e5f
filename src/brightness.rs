//! Brightness control
//!
//! Commands talk in the 0-255 public scale while the output stage needs the
//! native PWM resolution. The native value is always derived from the public
//! one with [`to_native`], so the two never drift apart.

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Highest public brightness
pub const MAX_BRIGHTNESS: u8 = 255;

/// Map public brightness (0-255) onto `0..=range`, rounding to nearest
#[allow(clippy::cast_possible_truncation)]
pub const fn to_native(public: u8, range: u16) -> u16 {
    ((public as u32 * range as u32 + MAX_BRIGHTNESS as u32 / 2) / MAX_BRIGHTNESS as u32) as u16
}

/// Map native brightness (`0..=range`) back onto 0-255, rounding to nearest
#[allow(clippy::cast_possible_truncation)]
pub const fn to_public(native: u16, range: u16) -> u8 {
    if range == 0 {
        return 0;
    }
    let native = if native > range { range } else { native };
    ((native as u32 * MAX_BRIGHTNESS as u32 + range as u32 / 2) / range as u32) as u8
}

/// User-configured brightness in both scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessController {
    range: u16,
    public: u8,
    native: u16,
}

impl BrightnessController {
    /// Create a controller for a PWM resolution of `range`
    ///
    /// A zero range is bumped to 1 so the fraction stays defined.
    pub const fn new(brightness: u8, range: u16) -> Self {
        let range = if range == 0 { 1 } else { range };
        Self {
            range,
            public: brightness,
            native: to_native(brightness, range),
        }
    }

    /// Brightness on the public 0-255 scale
    pub const fn public(&self) -> u8 {
        self.public
    }

    /// Brightness on the native PWM scale
    pub const fn native(&self) -> u16 {
        self.native
    }

    /// Native duty-cycle ceiling
    pub const fn range(&self) -> u16 {
        self.range
    }

    /// Brightness as a `0.0..=1.0` fraction of the native range
    pub fn fraction(&self) -> f32 {
        f32::from(self.native) / f32::from(self.range)
    }

    /// Set brightness on the public scale
    pub fn set_absolute(&mut self, brightness: u8) {
        self.public = brightness;
        self.native = to_native(brightness, self.range);
    }

    /// Shift brightness by a percentage of the full native range
    ///
    /// `percent` is clamped to `-100..=100` and the result saturates at both
    /// ends of the scale.
    pub fn change(&mut self, percent: i8) {
        let percent = i32::from(percent.clamp(-100, 100));
        let range = i32::from(self.range);
        let delta = percent * range / 100;
        let native = (i32::from(self.native) + delta).clamp(0, range);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let public = to_public(native as u16, self.range);

        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessController.change] {}% -> {} (was {})",
            percent, public, self.public
        );

        self.set_absolute(public);
    }
}

impl Default for BrightnessController {
    fn default() -> Self {
        Self::new(MAX_BRIGHTNESS, u16::from(MAX_BRIGHTNESS))
    }
}
