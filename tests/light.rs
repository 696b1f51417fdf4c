mod tests {
    use embassy_time::Instant;
    use myrtio_sonoff_l1::{
        ColorMode, DEFAULT_BAUDRATE, IntentQueue, LightOutput, LightSnapshot, LightStateSource,
        ModeId, SerialSink, SonoffL1Config, SonoffL1Light, TERMINATOR,
    };

    #[derive(Debug, Default)]
    struct RecordingSink {
        bytes: Vec<u8>,
        flushes: usize,
        baudrate: Option<u32>,
    }

    impl RecordingSink {
        fn commands(&self) -> Vec<String> {
            assert_eq!(self.bytes.last().copied().unwrap_or(TERMINATOR), TERMINATOR);
            self.bytes
                .split(|byte| *byte == TERMINATOR)
                .filter(|chunk| !chunk.is_empty())
                .map(|chunk| String::from_utf8(chunk.to_vec()).unwrap())
                .collect()
        }
    }

    impl SerialSink for RecordingSink {
        type Error = core::convert::Infallible;

        fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error> {
            self.baudrate = Some(baudrate);
            Ok(())
        }

        fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.bytes.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Disconnected;

    struct BrokenSink;

    impl SerialSink for BrokenSink {
        type Error = Disconnected;

        fn set_baudrate(&mut self, _baudrate: u32) -> Result<(), Self::Error> {
            Err(Disconnected)
        }

        fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Err(Disconnected)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct HostLight {
        effect: String,
    }

    impl LightStateSource for HostLight {
        fn effect_label(&self) -> Option<&str> {
            Some(self.effect.as_str())
        }

        fn rgb(&self) -> (f32, f32, f32) {
            (0.0, 1.0, 0.25)
        }

        fn is_on(&self) -> bool {
            true
        }

        fn brightness(&self) -> f32 {
            0.5
        }
    }

    fn light() -> SonoffL1Light<RecordingSink> {
        SonoffL1Light::new(RecordingSink::default(), &SonoffL1Config::default())
    }

    const NOW: Instant = Instant::from_millis(12_345);

    #[test]
    fn test_setup_configures_baudrate() {
        let mut light = light();
        light.setup().unwrap();
        assert_eq!(light.sink().baudrate, Some(DEFAULT_BAUDRATE));
        assert_eq!(DEFAULT_BAUDRATE, 19_200);
        assert!(light.sink().bytes.is_empty());
    }

    #[test]
    fn test_traits() {
        let light = light();
        let traits = light.traits();
        assert!(traits.supports(ColorMode::Rgb));
        assert_eq!(traits.color_modes, &[ColorMode::Rgb]);
        assert_eq!(traits.effects.len(), 12);
    }

    #[test]
    fn test_write_state_sends_terminated_command() {
        let mut light = light();
        let snapshot = LightSnapshot {
            on: true,
            red: 1.0,
            green: 0.5,
            blue: 0.0,
            brightness: 0.75,
            effect: Some("None"),
        };
        light.set_mode_sync(3, 3, NOW).unwrap();

        light.write_state(&snapshot, NOW).unwrap();

        let sink = light.into_inner();
        assert_eq!(sink.flushes, 2);
        assert_eq!(sink.bytes.last(), Some(&0x1B));
        assert_eq!(
            sink.commands()[1],
            r#"AT+UPDATE="sequence":"12345","switch":"on","light_type":1,"colorR":255,"colorG":127,"colorB":0,"bright":75,"mode":1"#
        );
    }

    #[test]
    fn test_write_state_from_host_source() {
        let mut light = light();
        light.set_mode_rgb_gradient(NOW).unwrap();
        let host = HostLight {
            effect: "RGB Gradient".into(),
        };

        light.write_state(&host, Instant::from_millis(20_000)).unwrap();

        assert_eq!(light.register().mode(), ModeId::RgbGradient);
        assert_eq!(
            light.sink().commands()[1],
            r#"AT+UPDATE="sequence":"20000","switch":"on","light_type":1,"colorR":0,"colorG":255,"colorB":63,"bright":50,"mode":8"#
        );
    }

    #[test]
    fn test_sync_selection_clamps() {
        let mut light = light();

        light.set_mode_sync(15, 0, NOW).unwrap();

        let (mode, sensitivity, speed) = light.register().current();
        assert_eq!(mode, ModeId::SyncToMusic);
        assert_eq!(sensitivity.get(), 10);
        assert_eq!(speed.get(), 1);
        assert_eq!(
            light.sink().commands(),
            [r#"AT+UPDATE="sequence":"12345","mode":12,"sensitive":10,"speed":1"#]
        );
    }

    #[test]
    fn test_mode_selection_is_idempotent() {
        let mut light = light();

        light.set_mode_rgb_pulse(Instant::from_millis(1_000)).unwrap();
        light.set_mode_rgb_pulse(Instant::from_millis(1_250)).unwrap();

        assert_eq!(light.register().mode(), ModeId::RgbPulse);
        assert_eq!(
            light.sink().commands(),
            [
                r#"AT+UPDATE="sequence":"1000","mode":9"#,
                r#"AT+UPDATE="sequence":"1250","mode":9"#,
            ]
        );
    }

    #[test]
    fn test_fixed_pattern_entry_points() {
        type Select =
            fn(&mut SonoffL1Light<RecordingSink>, Instant) -> Result<(), core::convert::Infallible>;
        let entries: [(Select, ModeId); 11] = [
            (SonoffL1Light::set_mode_colorful, ModeId::Colorful),
            (SonoffL1Light::set_mode_colorful_gradient, ModeId::ColorfulGradient),
            (SonoffL1Light::set_mode_colorful_breath, ModeId::ColorfulBreath),
            (SonoffL1Light::set_mode_diy_gradient, ModeId::DiyGradient),
            (SonoffL1Light::set_mode_diy_pulse, ModeId::DiyPulse),
            (SonoffL1Light::set_mode_diy_breath, ModeId::DiyBreath),
            (SonoffL1Light::set_mode_diy_strobe, ModeId::DiyStrobe),
            (SonoffL1Light::set_mode_rgb_gradient, ModeId::RgbGradient),
            (SonoffL1Light::set_mode_rgb_pulse, ModeId::RgbPulse),
            (SonoffL1Light::set_mode_rgb_breath, ModeId::RgbBreath),
            (SonoffL1Light::set_mode_rgb_strobe, ModeId::RgbStrobe),
        ];

        for (select, mode) in entries {
            let mut light = light();
            select(&mut light, NOW).unwrap();

            assert_eq!(light.register().mode(), mode);
            assert_eq!(
                light.sink().commands(),
                [format!(r#"AT+UPDATE="sequence":"12345","mode":{}"#, mode.code())]
            );
        }
    }

    #[test]
    fn test_select_sync_resumes_params() {
        let mut light = light();
        light.set_mode_sync(4, 70, NOW).unwrap();
        light.set_mode_colorful(NOW).unwrap();

        light.select_mode(ModeId::SyncToMusic, NOW).unwrap();

        assert_eq!(
            light.sink().commands()[2],
            r#"AT+UPDATE="sequence":"12345","mode":12,"sensitive":4,"speed":70"#
        );
    }

    #[test]
    fn test_select_effect() {
        let mut light = light();

        assert!(light.select_effect(Some("DIY Strobe"), NOW).unwrap());
        assert_eq!(light.register().mode(), ModeId::DiyStrobe);

        assert!(light.select_effect(Some("None"), NOW).unwrap());
        assert_eq!(light.register().mode(), ModeId::Colorful);

        assert!(!light.select_effect(Some("Fireworks"), NOW).unwrap());
        assert_eq!(light.sink().commands().len(), 2);
    }

    #[test]
    fn test_config_initial_register() {
        let config = SonoffL1Config {
            mode: ModeId::SyncToMusic,
            sensitivity: 20,
            speed: -3,
            ..SonoffL1Config::default()
        };
        let mut light = SonoffL1Light::new(RecordingSink::default(), &config);
        let snapshot = LightSnapshot {
            on: true,
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            brightness: 0.0,
            effect: Some("Sync to Music"),
        };

        light.apply_state(&snapshot, NOW).unwrap();

        assert!(light.sink().commands()[0].ends_with(r#""mode":12,"sensitive":10,"speed":1"#));
    }

    #[test]
    fn test_transport_errors_propagate() {
        let mut light = SonoffL1Light::new(BrokenSink, &SonoffL1Config::default());
        assert_eq!(light.setup(), Err(Disconnected));
        assert_eq!(light.set_mode_rgb_breath(NOW), Err(Disconnected));
        assert_eq!(light.register().mode(), ModeId::RgbBreath);
    }

    #[test]
    fn test_process_intents_in_order() {
        let queue: IntentQueue<4> = IntentQueue::new();
        let sender = queue.sender();
        sender.select(ModeId::ColorfulBreath).unwrap();
        sender.sync(0, 150).unwrap();
        sender.select(ModeId::DiyPulse).unwrap();

        let mut light = light();
        let sent = light.process_intents(&queue.receiver(), NOW).unwrap();

        assert_eq!(sent, 3);
        assert!(queue.is_empty());
        assert_eq!(
            light.sink().commands(),
            [
                r#"AT+UPDATE="sequence":"12345","mode":3"#,
                r#"AT+UPDATE="sequence":"12345","mode":12,"sensitive":1,"speed":100"#,
                r#"AT+UPDATE="sequence":"12345","mode":5"#,
            ]
        );
        assert_eq!(light.register().mode(), ModeId::DiyPulse);
        assert_eq!(light.register().sensitivity().get(), 1);
    }
}
