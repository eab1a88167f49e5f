use myrtio_pwm_light::{Duty, OutputDriver};

/// Output driver that records every frame written to it
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub writes: Vec<Duty>,
}

impl RecordingDriver {
    #[allow(dead_code)]
    pub fn last(&self) -> Option<Duty> {
        self.writes.last().copied()
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, duty: Duty) {
        self.writes.push(duty);
    }
}
