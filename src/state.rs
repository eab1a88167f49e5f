//! Light state owned by the engine

use serde::{Serialize, Serializer};

use crate::brightness::BrightnessController;
use crate::color::ColorModel;

const POWER_NAME_ON: &str = "ON";
const POWER_NAME_OFF: &str = "OFF";

/// Fixture power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    #[default]
    On,
    Off,
}

impl PowerState {
    pub const fn from_bool(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => POWER_NAME_ON,
            Self::Off => POWER_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            POWER_NAME_ON => Some(Self::On),
            POWER_NAME_OFF => Some(Self::Off),
            _ => None,
        }
    }
}

impl Serialize for PowerState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// User-controlled part of the light state
///
/// Effects animate the output from this state but only rainbow effects write
/// back to it (the color).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub power: PowerState,
    pub color: ColorModel,
    pub brightness: BrightnessController,
}
