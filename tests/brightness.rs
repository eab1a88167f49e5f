mod tests {
    use myrtio_pwm_light::BrightnessController;
    use myrtio_pwm_light::brightness::{to_native, to_public};

    #[test]
    fn test_round_trip() {
        for range in [255u16, 1023, 4095] {
            for b in 0..=255u8 {
                let back = to_public(to_native(b, range), range);
                assert!(
                    back.abs_diff(b) <= 1,
                    "range {}: {} -> {} -> {}",
                    range,
                    b,
                    to_native(b, range),
                    back
                );
            }
        }
    }

    #[test]
    fn test_native_mapping() {
        assert_eq!(to_native(0, 1023), 0);
        assert_eq!(to_native(255, 1023), 1023);
        assert_eq!(to_native(128, 1023), 514);
        assert_eq!(to_native(100, 255), 100);
        assert_eq!(to_public(1023, 1023), 255);
        assert_eq!(to_public(2000, 1023), 255);
    }

    #[test]
    fn test_set_absolute() {
        let mut brightness = BrightnessController::new(255, 1023);
        brightness.set_absolute(128);
        assert_eq!(brightness.public(), 128);
        assert_eq!(brightness.native(), 514);
    }

    #[test]
    fn test_change_saturates_up() {
        let mut brightness = BrightnessController::new(200, 1023);
        brightness.change(100);
        assert_eq!(brightness.public(), 255);
        assert_eq!(brightness.native(), 1023);

        for _ in 0..5 {
            brightness.change(100);
            assert_eq!(brightness.public(), 255);
            assert_eq!(brightness.native(), 1023);
        }
    }

    #[test]
    fn test_change_saturates_down() {
        let mut brightness = BrightnessController::new(10, 1023);
        brightness.change(-5);
        assert_eq!(brightness.public(), 0);
        brightness.change(-100);
        assert_eq!(brightness.public(), 0);
        assert_eq!(brightness.native(), 0);
    }

    #[test]
    fn test_change_step() {
        let mut brightness = BrightnessController::new(0, 1023);
        brightness.change(5);
        assert_eq!(brightness.public(), 13);
        assert_eq!(brightness.native(), to_native(13, 1023));

        brightness.change(-5);
        assert_eq!(brightness.public(), 0);
    }

    #[test]
    fn test_change_clamps_percent() {
        let mut brightness = BrightnessController::new(255, 255);
        brightness.change(i8::MIN);
        assert_eq!(brightness.public(), 0);
        brightness.change(i8::MAX);
        assert_eq!(brightness.public(), 255);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(BrightnessController::new(255, 1023).fraction(), 1.0);
        assert_eq!(BrightnessController::new(0, 1023).fraction(), 0.0);
    }

    #[test]
    fn test_zero_range() {
        let brightness = BrightnessController::new(255, 0);
        assert_eq!(brightness.range(), 1);
        assert_eq!(brightness.native(), 1);
    }
}
