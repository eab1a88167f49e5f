//! Effect scheduling and timing.
//!
//! Provides portable, non-blocking effect pacing. The owning loop calls
//! [`EffectScheduler::tick`] as often as it wants; the scheduler checks the
//! supplied time against the tick interval and only then advances the
//! effect and writes the output. It never sleeps or reads a clock itself.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::brightness::to_native;
use crate::effect::{EffectId, EffectSlot, Frame};
use crate::output::{Duty, PwmOutputStage};
use crate::state::LightState;

/// Default minimum time between animation steps
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Nothing was due, no output was written
    Idle,
    /// The light is off and a dark frame was written
    Blanked(Duty),
    /// An effect step ran and this frame was written
    Rendered(Duty),
}

/// Time-gated effect state machine
///
/// While the light is on, every tick that comes more than `interval` after
/// the previous step advances the effect once and renders. While it is off,
/// the first tick writes a dark frame and later ones do nothing.
#[derive(Debug, Clone)]
pub struct EffectScheduler {
    interval: Duration,
    last_tick: Option<Instant>,
    effect: EffectSlot,
    dark: bool,
}

impl EffectScheduler {
    pub fn new(effect: EffectId, brightness: u8, interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
            effect: effect.to_slot(brightness),
            dark: false,
        }
    }

    /// Minimum time between animation steps
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Currently selected effect
    pub fn effect(&self) -> EffectId {
        self.effect.id()
    }

    /// Effect state, for observation
    pub const fn slot(&self) -> &EffectSlot {
        &self.effect
    }

    /// Switch the effect
    ///
    /// Selecting the running effect again keeps its animation state.
    pub fn set_effect(&mut self, effect: EffectId, brightness: u8) {
        if self.effect.id() == effect {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[EffectScheduler.set_effect] {} -> {}",
            self.effect.id().as_str(),
            effect.as_str()
        );
        self.effect = effect.to_slot(brightness);
    }

    /// Check if an animation step is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) => now.saturating_duration_since(last) > self.interval,
            None => true,
        }
    }

    /// Advance the effect and render if a step is due.
    pub fn tick<O: OutputDriver>(
        &mut self,
        now: Instant,
        state: &mut LightState,
        output: &mut PwmOutputStage<O>,
    ) -> TickResult {
        if !state.power.is_on() {
            if self.dark {
                return TickResult::Idle;
            }
            self.dark = true;
            return TickResult::Blanked(output.blank());
        }

        if !self.is_due(now) {
            return TickResult::Idle;
        }
        self.last_tick = Some(now);

        let mut frame = Frame {
            color: &mut state.color,
            brightness: state.brightness.public(),
        };
        self.effect.step(&mut frame);
        let level = frame.brightness;

        let range = state.brightness.range();
        let fraction = f32::from(to_native(level, range)) / f32::from(range);

        self.dark = false;
        TickResult::Rendered(output.render(state.color.rgb(), fraction))
    }
}
