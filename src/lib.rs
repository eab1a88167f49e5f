#![no_std]

//! Three-channel PWM light engine
//!
//! - `color` - RGB/HSV color model and remote presets
//! - `brightness` - public/native brightness scales
//! - `gamma` - perceptual correction table
//! - `output` - duty-cycle computation and PWM writes
//! - `effect` - autonomous effects and their state
//! - `scheduler` - time-gated effect state machine
//! - `engine` - owner of the light state
//! - `command`, `command_queue`, `payload` - command ingestion
//! - `snapshot` - state publication

pub mod brightness;
pub mod color;
pub mod command;
pub mod command_queue;
pub mod effect;
pub mod engine;
pub mod gamma;
pub mod output;
pub mod payload;
pub mod scheduler;
pub mod snapshot;
pub mod state;

pub use brightness::BrightnessController;
pub use command::{Command, CommandError};
pub use command_queue::CommandQueue;
pub use effect::{EffectId, EffectSlot};
pub use engine::{LightConfig, LightEngine};
pub use gamma::gamma8;
pub use output::{Duty, Polarity, PwmChannels, PwmOutputStage};
pub use payload::LightCommandPayload;
pub use scheduler::{EffectScheduler, TickResult};
pub use snapshot::LightSnapshot;
pub use state::{LightState, PowerState};

pub use color::{ColorModel, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract PWM output trait
///
/// Implement this trait to support different hardware platforms.
/// The light engine is generic over this trait.
pub trait OutputDriver {
    /// Write one duty-cycle value per channel
    fn write(&mut self, duty: Duty);
}
