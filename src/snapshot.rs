use serde::Serialize;

use crate::color::Rgb;
use crate::effect::EffectId;
use crate::state::{LightState, PowerState};

/// RGB color as published in snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SnapshotColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for SnapshotColor {
    fn from(color: Rgb) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// A snapshot of the current light state for external systems.
///
/// Serializes to `{"power":"ON","color":{"r":..,"g":..,"b":..},"brightness":..,"effect":".."}`.
/// Brightness is the user-configured value, not the animated output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightSnapshot {
    pub power: PowerState,
    pub color: SnapshotColor,
    pub brightness: u8,
    pub effect: EffectId,
}

impl LightSnapshot {
    pub fn new(state: &LightState, effect: EffectId) -> Self {
        Self {
            power: state.power,
            color: state.color.rgb().into(),
            brightness: state.brightness.public(),
            effect,
        }
    }
}
