//! PWM output stage
//!
//! Turns the current color and brightness into one duty-cycle value per
//! channel and hands them to an [`OutputDriver`].

use embedded_hal::pwm::SetDutyCycle;
use libm::roundf;
use smart_leds::RGB;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::gamma::gamma8;

/// Per-channel duty cycle in native PWM units
pub type Duty = RGB<u16>;

/// LED wiring polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Channels sink to ground, higher duty is brighter
    #[default]
    CommonCathode,
    /// Channels share the supply, lower duty is brighter
    CommonAnode,
}

/// Gamma-corrected, brightness-scaled PWM writer
#[derive(Debug)]
pub struct PwmOutputStage<O: OutputDriver> {
    driver: O,
    range: u16,
    polarity: Polarity,
}

impl<O: OutputDriver> PwmOutputStage<O> {
    pub const fn new(driver: O, range: u16, polarity: Polarity) -> Self {
        Self {
            driver,
            range,
            polarity,
        }
    }

    /// Native duty-cycle ceiling
    pub const fn range(&self) -> u16 {
        self.range
    }

    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Compute the duty cycles for a color without writing them
    ///
    /// `brightness` is a `0.0..=1.0` fraction of the native range.
    pub fn duty(&self, color: Rgb, brightness: f32) -> Duty {
        let brightness = if brightness.is_nan() {
            0.0
        } else {
            brightness.clamp(0.0, 1.0)
        };
        Duty {
            r: self.channel_duty(color.r, brightness),
            g: self.channel_duty(color.g, brightness),
            b: self.channel_duty(color.b, brightness),
        }
    }

    /// Compute the duty cycles for a color and write them to the outputs
    pub fn render(&mut self, color: Rgb, brightness: f32) -> Duty {
        let duty = self.duty(color, brightness);
        self.driver.write(duty);
        duty
    }

    /// Write a fully dark frame
    pub fn blank(&mut self) -> Duty {
        self.render(Rgb::default(), 0.0)
    }

    /// Get a reference to the driver.
    pub const fn driver(&self) -> &O {
        &self.driver
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel_duty(&self, value: u8, brightness: f32) -> u16 {
        let range = f32::from(self.range);
        let scaled = f32::from(gamma8(value)) * range / 255.0;
        let dimmed = roundf(scaled * brightness).clamp(0.0, range) as u16;

        match self.polarity {
            Polarity::CommonCathode => dimmed,
            Polarity::CommonAnode => self.range.abs_diff(dimmed),
        }
    }
}

/// Three PWM channels driving one RGB LED
///
/// Each channel is owned, so the three outputs are necessarily distinct.
pub struct PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub const fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    /// Smallest maximum duty cycle across the three channels
    ///
    /// Use it as the PWM range when the timers are configured identically.
    pub fn max_duty_cycle(&self) -> u16 {
        self.red
            .max_duty_cycle()
            .min(self.green.max_duty_cycle())
            .min(self.blue.max_duty_cycle())
    }

    /// Release the channels
    pub fn into_inner(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> OutputDriver for PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn write(&mut self, duty: Duty) {
        // Write errors are ignored
        let _ = self.red.set_duty_cycle(duty.r);
        let _ = self.green.set_duty_cycle(duty.g);
        let _ = self.blue.set_duty_cycle(duty.b);
    }
}
