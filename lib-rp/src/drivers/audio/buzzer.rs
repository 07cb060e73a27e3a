use super::{pwm_config::{tone_in_range, PwmTimerConfig}, PlayTone, PwmSlice};

pub struct Buzzer<P: PwmSlice> {
    pwm: P,
    clk_hz: u32,
}

impl<P: PwmSlice> Buzzer<P> {
    /// Takes ownership of the slice and leaves it running but silent.
    pub fn new(pwm: P) -> Self {
        let mut buzzer = Buzzer {
            clk_hz: pwm.clock_hz(),
            pwm,
        };

        buzzer.pwm.set_divider(PwmTimerConfig::IDLE_DIVIDER);
        buzzer.pwm.set_enabled(true);
        buzzer.pwm.set_level(0);

        debug!("buzzer initialized, pwm clock {} Hz", buzzer.clk_hz);

        buzzer
    }

    pub fn clock_hz(&self) -> u32 {
        self.clk_hz
    }

    pub fn release(self) -> P {
        self.pwm
    }

    fn apply(&mut self, config: &PwmTimerConfig) {
        self.pwm.set_divider(config.divider);
        self.pwm.set_wrap(config.wrap);
        self.pwm.set_level(config.level);
        self.pwm.set_enabled(true);
    }
}

impl<P: PwmSlice> PlayTone for Buzzer<P> {
    fn start_tone(&mut self, freq_hz: u32, volume: f32) {
        match PwmTimerConfig::for_tone(self.clk_hz, freq_hz, volume) {
            Some(config) => {
                trace!("tone {} Hz, div {}, wrap {}, level {}", freq_hz, config.divider, config.wrap, config.level);
                self.apply(&config);
            },
            None => self.stop_tone(),
        }
    }

    fn stop_tone(&mut self) {
        self.pwm.set_level(0);
        self.pwm.set_enabled(true);
    }

    fn can_play_tone(&self, freq_hz: u32) -> bool {
        tone_in_range(self.clk_hz, freq_hz)
    }
}
