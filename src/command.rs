//! Commands accepted by the light engine
//!
//! Every command source (MQTT, IR remote, buttons) is normalized into a
//! [`Command`]. Numeric inputs are clamped on construction; names are
//! validated here so the engine only ever sees known effects.

use crate::color::presets::BRIGHTNESS_STEP_PERCENT;
use crate::color::{HUE_DEGREES, Hsv, Rgb};
use crate::effect::EffectId;
use crate::state::PowerState;

/// Command rejected at ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Effect name is not one of the known effects
    UnknownEffect,
    /// Power state is neither `ON` nor `OFF`
    UnknownPowerState,
}

/// Commands that can be applied to the light engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Turn the light on or off
    Power(PowerState),
    /// Flip the power state
    TogglePower,
    /// Set the RGB color
    SetColor(Rgb),
    /// Set the color from HSV
    SetHsv(Hsv),
    /// Set brightness on the public 0-255 scale
    SetBrightness(u8),
    /// Shift brightness by a percentage of the full range
    ChangeBrightness(i8),
    /// Select an effect
    SetEffect(EffectId),
}

impl Command {
    pub const fn power(on: bool) -> Self {
        Self::Power(PowerState::from_bool(on))
    }

    /// Power command from an `ON`/`OFF` string
    pub fn power_from_str(state: &str) -> Result<Self, CommandError> {
        PowerState::parse_from_str(state)
            .map(Self::Power)
            .ok_or(CommandError::UnknownPowerState)
    }

    /// Color command, each channel clamped to 0-255
    pub fn set_color(r: i32, g: i32, b: i32) -> Self {
        Self::SetColor(Rgb {
            r: clamp_u8(r),
            g: clamp_u8(g),
            b: clamp_u8(b),
        })
    }

    /// HSV command, hue wrapped to 0..360 and the rest clamped to 0.0..=1.0
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_hsv(hue: i32, sat: f32, val: f32) -> Self {
        let hue = hue.rem_euclid(i32::from(HUE_DEGREES)) as u16;
        Self::SetHsv(Hsv::new(hue, sat, val))
    }

    /// Absolute brightness command, clamped to 0-255
    pub fn set_brightness(brightness: i32) -> Self {
        Self::SetBrightness(clamp_u8(brightness))
    }

    /// Relative brightness command, clamped to -100..=100 percent
    #[allow(clippy::cast_possible_truncation)]
    pub fn change_brightness(percent: i32) -> Self {
        Self::ChangeBrightness(percent.clamp(-100, 100) as i8)
    }

    /// Remote "brightness up" key
    pub const fn brightness_up() -> Self {
        Self::ChangeBrightness(BRIGHTNESS_STEP_PERCENT)
    }

    /// Remote "brightness down" key
    pub const fn brightness_down() -> Self {
        Self::ChangeBrightness(-BRIGHTNESS_STEP_PERCENT)
    }

    /// Effect command from its name
    pub fn set_effect(name: &str) -> Result<Self, CommandError> {
        EffectId::parse_from_str(name)
            .map(Self::SetEffect)
            .ok_or(CommandError::UnknownEffect)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, i32::from(u8::MAX)) as u8
}
