//! Brightness breathing effect

use super::{Direction, Effect, Frame};

/// Lowest brightness the fade dips to
pub const FADE_FLOOR: u8 = 10;

/// Triangle wave on brightness, one public step per tick
///
/// The wave runs between [`FADE_FLOOR`] and the user brightness. When the
/// user brightness is below the floor, the floor follows it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeEffect {
    level: u8,
    direction: Direction,
}

impl FadeEffect {
    pub const fn new(level: u8) -> Self {
        Self {
            level,
            direction: Direction::Up,
        }
    }

    /// Current output level on the public scale
    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Effect for FadeEffect {
    fn step(&mut self, frame: &mut Frame<'_>) {
        let ceiling = frame.brightness;
        let floor = FADE_FLOOR.min(ceiling);
        let next = i16::from(self.level) + self.direction.delta();

        if next > i16::from(ceiling) {
            self.level = ceiling;
            self.direction = Direction::Down;
        } else if next < i16::from(floor) {
            self.level = floor;
            self.direction = Direction::Up;
        } else {
            self.level = u8::try_from(next).unwrap_or(ceiling);
        }

        frame.brightness = self.level;
    }
}
