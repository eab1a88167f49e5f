use super::{Direction, Effect, Frame};

/// Square wave on brightness: full on one tick, dark the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashEffect {
    direction: Direction,
}

impl FlashEffect {
    pub const fn new() -> Self {
        Self {
            direction: Direction::Up,
        }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Effect for FlashEffect {
    fn step(&mut self, frame: &mut Frame<'_>) {
        if self.direction == Direction::Down {
            frame.brightness = 0;
        }
        self.direction = self.direction.flipped();
    }
}
