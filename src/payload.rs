//! JSON command payload
//!
//! Mirrors the JSON light schema used on the `/set` topic:
//!
//! ```json
//! {"state": "ON", "color": {"r": 255, "g": 0, "b": 0}, "brightness": 128, "effect": "fade"}
//! ```
//!
//! All fields are optional. Numbers are accepted as wide integers and clamped
//! so that out-of-range values never reach the engine.

use heapless::Vec;
use serde::Deserialize;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::{Command, CommandError};

/// Maximum number of commands a single payload expands to
pub const MAX_PAYLOAD_COMMANDS: usize = 5;

/// RGB color in a command payload
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PayloadColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// HSV color in a command payload
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PayloadHsv {
    pub h: i32,
    pub s: f32,
    pub v: f32,
}

/// Light command payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LightCommandPayload<'a> {
    /// Requested state ("ON" or "OFF")
    #[serde(default, borrow)]
    pub state: Option<&'a str>,
    /// Requested RGB color
    #[serde(default)]
    pub color: Option<PayloadColor>,
    /// Requested HSV color
    #[serde(default)]
    pub hsv: Option<PayloadHsv>,
    /// Requested brightness (0-255)
    #[serde(default)]
    pub brightness: Option<i32>,
    /// Requested effect name
    #[serde(default, borrow)]
    pub effect: Option<&'a str>,
}

impl LightCommandPayload<'_> {
    /// Validate the payload and expand it into commands
    ///
    /// Commands come out in application order: power, color, HSV,
    /// brightness, effect. If any field is invalid nothing is returned, so a
    /// bad payload never half-applies.
    pub fn commands(&self) -> Result<Vec<Command, MAX_PAYLOAD_COMMANDS>, CommandError> {
        let power = self.state.map(Command::power_from_str).transpose();
        let effect = self.effect.map(Command::set_effect).transpose();

        let (power, effect) = match (power, effect) {
            (Ok(power), Ok(effect)) => (power, effect),
            (Err(error), _) | (_, Err(error)) => {
                #[cfg(feature = "esp32-log")]
                println!("[LightCommandPayload.commands] rejected: {:?}", error);
                return Err(error);
            }
        };

        let color = self.color.map(|c| Command::set_color(c.r, c.g, c.b));
        let hsv = self.hsv.map(|c| Command::set_hsv(c.h, c.s, c.v));
        let brightness = self.brightness.map(Command::set_brightness);

        let mut commands = Vec::new();
        for command in [power, color, hsv, brightness, effect].into_iter().flatten() {
            // Capacity matches the number of fields
            let _ = commands.push(command);
        }
        Ok(commands)
    }
}
