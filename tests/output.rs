mod common;

mod tests {
    use core::convert::Infallible;

    use embedded_hal::pwm::{ErrorType, SetDutyCycle};
    use myrtio_pwm_light::{Duty, OutputDriver, Polarity, PwmChannels, PwmOutputStage, Rgb};

    use crate::common::RecordingDriver;

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn stage(range: u16, polarity: Polarity) -> PwmOutputStage<RecordingDriver> {
        PwmOutputStage::new(RecordingDriver::default(), range, polarity)
    }

    #[test]
    fn test_full_white_polarity() {
        let mut cathode = stage(1023, Polarity::CommonCathode);
        assert_eq!(cathode.render(WHITE, 1.0), Duty::new(1023, 1023, 1023));

        let mut anode = stage(1023, Polarity::CommonAnode);
        assert_eq!(anode.render(WHITE, 1.0), Duty::new(0, 0, 0));
    }

    #[test]
    fn test_blank_polarity() {
        let mut cathode = stage(1023, Polarity::CommonCathode);
        assert_eq!(cathode.blank(), Duty::new(0, 0, 0));

        let mut anode = stage(1023, Polarity::CommonAnode);
        assert_eq!(anode.blank(), Duty::new(1023, 1023, 1023));
    }

    #[test]
    fn test_gamma_applied() {
        let stage = stage(255, Polarity::CommonCathode);
        assert_eq!(stage.duty(Rgb::new(128, 0, 255), 1.0), Duty::new(37, 0, 255));
    }

    #[test]
    fn test_brightness_scaling() {
        let stage = stage(1023, Polarity::CommonCathode);
        assert_eq!(stage.duty(WHITE, 0.5), Duty::new(512, 512, 512));
        assert_eq!(stage.duty(WHITE, 0.0), Duty::new(0, 0, 0));
        assert_eq!(stage.duty(WHITE, 7.0), Duty::new(1023, 1023, 1023));
        assert_eq!(stage.duty(WHITE, f32::NAN), Duty::new(0, 0, 0));
    }

    #[test]
    fn test_render_writes_driver() {
        let mut stage = stage(255, Polarity::CommonCathode);
        assert!(stage.driver().writes.is_empty());

        let duty = stage.render(Rgb::new(255, 0, 0), 1.0);
        assert_eq!(stage.driver().writes, [duty]);

        // Computing duty alone does not write
        let _ = stage.duty(WHITE, 1.0);
        assert_eq!(stage.driver().writes.len(), 1);
    }

    #[derive(Debug, Default)]
    struct MockPwm {
        duty: u16,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            1023
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_pwm_channels_write() {
        let mut channels = PwmChannels::new(
            MockPwm::default(),
            MockPwm::default(),
            MockPwm::default(),
        );
        assert_eq!(channels.max_duty_cycle(), 1023);

        channels.write(Duty::new(1, 2, 3));
        let (red, green, blue) = channels.into_inner();
        assert_eq!((red.duty, green.duty, blue.duty), (1, 2, 3));
    }
}
