//! Light engine - the single owner of the fixture state
//!
//! Mutators only change state. Output is written exclusively from
//! [`LightEngine::tick`], once per due tick, so a burst of commands never
//! produces partially updated frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::brightness::{BrightnessController, MAX_BRIGHTNESS};
use crate::color::{ColorModel, Rgb};
use crate::command::Command;
use crate::command_queue::CommandQueue;
use crate::effect::{EffectId, EffectSlot};
use crate::output::{Polarity, PwmOutputStage};
use crate::scheduler::{DEFAULT_TICK_INTERVAL, EffectScheduler, TickResult};
use crate::snapshot::LightSnapshot;
use crate::state::{LightState, PowerState};

/// Default PWM resolution (10-bit)
pub const DEFAULT_PWM_RANGE: u16 = 1023;

/// Configuration for the light engine
#[derive(Debug, Clone)]
pub struct LightConfig {
    /// Native duty-cycle ceiling of the PWM outputs
    pub pwm_range: u16,
    /// LED wiring polarity
    pub polarity: Polarity,
    /// Minimum time between animation steps
    pub tick_interval: Duration,
    /// Initial power state
    pub power: PowerState,
    /// Initial color
    pub color: Rgb,
    /// Initial brightness (0-255)
    pub brightness: u8,
    /// Initial effect
    pub effect: EffectId,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            pwm_range: DEFAULT_PWM_RANGE,
            polarity: Polarity::CommonCathode,
            tick_interval: DEFAULT_TICK_INTERVAL,
            power: PowerState::On,
            color: Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            brightness: MAX_BRIGHTNESS,
            effect: EffectId::Solid,
        }
    }
}

/// Light engine generic over the output driver
pub struct LightEngine<O: OutputDriver> {
    state: LightState,
    scheduler: EffectScheduler,
    output: PwmOutputStage<O>,
}

impl<O: OutputDriver> LightEngine<O> {
    pub fn new(driver: O, config: &LightConfig) -> Self {
        let brightness = BrightnessController::new(config.brightness, config.pwm_range);
        Self {
            state: LightState {
                power: config.power,
                color: ColorModel::new(config.color),
                brightness,
            },
            scheduler: EffectScheduler::new(
                config.effect,
                config.brightness,
                config.tick_interval,
            ),
            // Share the controller's range, it has already rejected zero
            output: PwmOutputStage::new(driver, brightness.range(), config.polarity),
        }
    }

    /// Advance the current effect and write the output if a tick is due
    ///
    /// Call this on every iteration of the owning loop. It never blocks.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        self.scheduler.tick(now, &mut self.state, &mut self.output)
    }

    /// Apply a single command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Power(power) => self.set_power(power),
            Command::TogglePower => self.set_power(self.state.power.toggled()),
            Command::SetColor(color) => self.set_color(color.r, color.g, color.b),
            Command::SetHsv(hsv) => self.set_hsv(hsv.hue, hsv.sat, hsv.val),
            Command::SetBrightness(brightness) => self.set_brightness_absolute(brightness),
            Command::ChangeBrightness(percent) => self.change_brightness(percent),
            Command::SetEffect(effect) => self.set_effect(effect),
        }
    }

    /// Apply all queued commands (non-blocking)
    ///
    /// Returns the number of commands applied.
    pub fn process_pending<const SIZE: usize>(&mut self, queue: &CommandQueue<SIZE>) -> usize {
        let mut applied = 0;
        while let Some(command) = queue.pop() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    pub fn set_power(&mut self, power: PowerState) {
        #[cfg(feature = "esp32-log")]
        {
            if power != self.state.power {
                println!("[LightEngine.set_power] {}", power.as_str());
            }
        }
        self.state.power = power;
    }

    pub fn power_on(&mut self) {
        self.set_power(PowerState::On);
    }

    pub fn power_off(&mut self) {
        self.set_power(PowerState::Off);
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.state.color.set_rgb(r, g, b);
    }

    pub fn set_hsv(&mut self, hue: u16, sat: f32, val: f32) {
        self.state.color.set_hsv(hue, sat, val);
    }

    pub fn set_brightness_absolute(&mut self, brightness: u8) {
        self.state.brightness.set_absolute(brightness);
    }

    pub fn change_brightness(&mut self, percent: i8) {
        self.state.brightness.change(percent);
    }

    pub fn set_effect(&mut self, effect: EffectId) {
        self.scheduler
            .set_effect(effect, self.state.brightness.public());
    }

    /// Current state as published to external systems
    pub fn snapshot(&self) -> LightSnapshot {
        LightSnapshot::new(&self.state, self.scheduler.effect())
    }

    pub const fn state(&self) -> &LightState {
        &self.state
    }

    pub fn effect(&self) -> EffectId {
        self.scheduler.effect()
    }

    /// Effect animation state, for observation
    pub const fn effect_slot(&self) -> &EffectSlot {
        self.scheduler.slot()
    }

    pub const fn output(&self) -> &PwmOutputStage<O> {
        &self.output
    }
}
