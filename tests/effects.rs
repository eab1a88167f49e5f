mod tests {
    use myrtio_pwm_light::ColorModel;
    use myrtio_pwm_light::color::{Hsv, Rgb, hsv2rgb};
    use myrtio_pwm_light::effect::{
        Direction, Effect, EffectId, EffectSlot, FADE_FLOOR, FadeEffect, FlashEffect, Frame,
        RainbowEffect,
    };

    fn step<E: Effect>(effect: &mut E, color: &mut ColorModel, ceiling: u8) -> u8 {
        let mut frame = Frame {
            color,
            brightness: ceiling,
        };
        effect.step(&mut frame);
        frame.brightness
    }

    #[test]
    fn test_fade_sequence() {
        let mut color = ColorModel::default();
        let mut fade = FadeEffect::new(40);

        let levels: Vec<u8> = (0..33).map(|_| step(&mut fade, &mut color, 40)).collect();

        assert_eq!(levels[0], 40);
        assert_eq!(levels[1], 39);
        assert_eq!(levels[30], FADE_FLOOR);
        assert_eq!(levels[31], FADE_FLOOR);
        assert_eq!(levels[32], FADE_FLOOR + 1);
        assert_eq!(fade.direction(), Direction::Up);
    }

    #[test]
    fn test_fade_stays_in_bounds() {
        let mut color = ColorModel::default();
        let mut fade = FadeEffect::new(200);
        let mut direction = fade.direction();

        for _ in 0..2_000 {
            let level = step(&mut fade, &mut color, 200);
            assert!((FADE_FLOOR..=200).contains(&level), "level {}", level);

            if fade.direction() != direction {
                match fade.direction() {
                    Direction::Down => assert_eq!(level, 200),
                    Direction::Up => assert_eq!(level, FADE_FLOOR),
                }
                direction = fade.direction();
            }
        }
    }

    #[test]
    fn test_fade_follows_lowered_ceiling() {
        let mut color = ColorModel::default();
        let mut fade = FadeEffect::new(200);

        assert_eq!(step(&mut fade, &mut color, 100), 100);
        assert_eq!(fade.direction(), Direction::Down);
        assert_eq!(step(&mut fade, &mut color, 100), 99);
    }

    #[test]
    fn test_fade_ceiling_below_floor() {
        let mut color = ColorModel::default();
        let mut fade = FadeEffect::new(5);

        for _ in 0..10 {
            assert_eq!(step(&mut fade, &mut color, 5), 5);
        }
    }

    #[test]
    fn test_fade_does_not_touch_color() {
        let mut color = ColorModel::default();
        color.set_rgb(1, 2, 3);
        let mut fade = FadeEffect::new(100);
        step(&mut fade, &mut color, 100);
        assert_eq!(color.rgb(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_flash_square_wave() {
        let mut color = ColorModel::default();
        let mut flash = FlashEffect::new();

        let levels: Vec<u8> = (0..6).map(|_| step(&mut flash, &mut color, 180)).collect();
        assert_eq!(levels, [180, 0, 180, 0, 180, 0]);
    }

    #[test]
    fn test_rainbow_wraps_to_one() {
        let mut color = ColorModel::default();
        let mut rainbow = RainbowEffect::new();
        assert_eq!(rainbow.hue(), 0);

        let mut hues = Vec::new();
        for _ in 0..720 {
            assert_eq!(step(&mut rainbow, &mut color, 255), 255);
            hues.push(rainbow.hue());
        }

        assert_eq!(hues[0], 1);
        assert_eq!(hues[358], 359);
        assert_eq!(hues[359], 1);
        assert!(hues.iter().all(|hue| (1..360).contains(hue)));
    }

    #[test]
    fn test_rainbow_writes_color() {
        let mut color = ColorModel::default();
        let mut rainbow = RainbowEffect::new();

        for _ in 0..120 {
            step(&mut rainbow, &mut color, 255);
        }
        assert_eq!(rainbow.hue(), 120);
        assert_eq!(color.rgb(), Rgb::new(0, 255, 0));
        assert_eq!(color.hsv(), Hsv::new(120, 1.0, 1.0));

        step(&mut rainbow, &mut color, 255);
        assert_eq!(color.rgb(), hsv2rgb(Hsv::new(121, 1.0, 1.0)));
    }

    #[test]
    fn test_fade_rainbow_steps_both() {
        let mut color = ColorModel::default();
        let mut slot = EffectId::FadeRainbow.to_slot(50);

        let mut frame = Frame {
            color: &mut color,
            brightness: 50,
        };
        slot.step(&mut frame);
        assert_eq!(frame.brightness, 50);

        let mut frame = Frame {
            color: &mut color,
            brightness: 50,
        };
        slot.step(&mut frame);
        assert_eq!(frame.brightness, 49);

        let EffectSlot::FadeRainbow(fade, rainbow) = &slot else {
            panic!("expected fade rainbow slot");
        };
        assert_eq!(fade.level(), 49);
        assert_eq!(rainbow.hue(), 2);
        assert_eq!(color.rgb(), hsv2rgb(Hsv::new(2, 1.0, 1.0)));
    }

    #[test]
    fn test_solid_is_inert() {
        let mut color = ColorModel::default();
        let mut slot = EffectSlot::Solid;
        let mut frame = Frame {
            color: &mut color,
            brightness: 77,
        };
        slot.step(&mut frame);
        assert_eq!(frame.brightness, 77);
        assert_eq!(color, ColorModel::default());
    }
}
