//! Autonomous effects with compile-time known variants
//!
//! Each effect advances one step per scheduler tick. Effect state lives in
//! [`EffectSlot`] so switching effects never allocates.

mod fade;
mod flash;
mod rainbow;

pub use fade::{FADE_FLOOR, FadeEffect};
pub use flash::FlashEffect;
pub use rainbow::RainbowEffect;
use serde::{Serialize, Serializer};

use crate::color::ColorModel;

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_FLASH: &str = "flash";
const EFFECT_NAME_FADE: &str = "fade";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_FADE_RAINBOW: &str = "fade_rainbow";

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_FLASH: u8 = 1;
const EFFECT_ID_FADE: u8 = 2;
const EFFECT_ID_RAINBOW: u8 = 3;
const EFFECT_ID_FADE_RAINBOW: u8 = 4;

/// Direction an animated value is currently moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Signed step, `+1` or `-1`
    pub const fn delta(self) -> i16 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Values an effect may animate during one tick
pub struct Frame<'a> {
    /// Fixture color, effects may overwrite it
    pub color: &'a mut ColorModel,
    /// Output brightness on the public scale
    ///
    /// Starts every tick at the user-configured brightness, which effects
    /// treat as their ceiling.
    pub brightness: u8,
}

pub trait Effect {
    /// Advance the effect by one step
    fn step(&mut self, frame: &mut Frame<'_>);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EffectSlot {
    /// Steady color and brightness
    #[default]
    Solid,
    /// Square wave between dark and full brightness
    Flash(FlashEffect),
    /// Triangle wave between the fade floor and full brightness
    Fade(FadeEffect),
    /// Hue rotation at full saturation and value
    Rainbow(RainbowEffect),
    /// Fade and rainbow together
    FadeRainbow(FadeEffect, RainbowEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    Solid = EFFECT_ID_SOLID,
    Flash = EFFECT_ID_FLASH,
    Fade = EFFECT_ID_FADE,
    Rainbow = EFFECT_ID_RAINBOW,
    FadeRainbow = EFFECT_ID_FADE_RAINBOW,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_FLASH => Self::Flash,
            EFFECT_ID_FADE => Self::Fade,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_FADE_RAINBOW => Self::FadeRainbow,
            _ => return None,
        })
    }

    /// Create fresh effect state, `brightness` seeds the fade level
    pub fn to_slot(self, brightness: u8) -> EffectSlot {
        match self {
            Self::Solid => EffectSlot::Solid,
            Self::Flash => EffectSlot::Flash(FlashEffect::new()),
            Self::Fade => EffectSlot::Fade(FadeEffect::new(brightness)),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::FadeRainbow => {
                EffectSlot::FadeRainbow(FadeEffect::new(brightness), RainbowEffect::new())
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Flash => EFFECT_NAME_FLASH,
            Self::Fade => EFFECT_NAME_FADE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::FadeRainbow => EFFECT_NAME_FADE_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SOLID => Some(Self::Solid),
            EFFECT_NAME_FLASH => Some(Self::Flash),
            EFFECT_NAME_FADE => Some(Self::Fade),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_FADE_RAINBOW => Some(Self::FadeRainbow),
            _ => None,
        }
    }
}

impl Serialize for EffectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl EffectSlot {
    /// Advance the current effect by one step
    pub fn step(&mut self, frame: &mut Frame<'_>) {
        match self {
            Self::Solid => {}
            Self::Flash(effect) => effect.step(frame),
            Self::Fade(effect) => effect.step(frame),
            Self::Rainbow(effect) => effect.step(frame),
            Self::FadeRainbow(fade, rainbow) => {
                fade.step(frame);
                rainbow.step(frame);
            }
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Solid => EffectId::Solid,
            Self::Flash(_) => EffectId::Flash,
            Self::Fade(_) => EffectId::Fade,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::FadeRainbow(..) => EffectId::FadeRainbow,
        }
    }
}
