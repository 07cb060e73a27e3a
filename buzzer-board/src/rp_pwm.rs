use ateam_lib_rp::drivers::audio::PwmSlice;
use embassy_rp::{
    clocks::clk_sys_freq,
    pwm::{ChannelAPin, ChannelBPin, Config, Pwm, Slice},
    Peripheral,
};
use fixed::{types::extra::U4, FixedU16};

#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum PwmOutput {
    A,
    B,
}

/// One RP2040 PWM slice driving a buzzer on one of its two outputs.
///
/// The rp2040 PWM registers are written as a whole by embassy, so a shadow
/// config is kept and pushed on every change.
pub struct RpPwmSlice<'d> {
    pwm: Pwm<'d>,
    config: Config,
    output: PwmOutput,
}

impl<'d> RpPwmSlice<'d> {
    pub fn new_output_a<T: Slice>(
        slice: impl Peripheral<P = T> + 'd,
        pin: impl Peripheral<P = impl ChannelAPin<T>> + 'd,
    ) -> Self {
        let config = Config::default();
        let pwm = Pwm::new_output_a(slice, pin, config.clone());
        Self::new(pwm, config, PwmOutput::A)
    }

    pub fn new_output_b<T: Slice>(
        slice: impl Peripheral<P = T> + 'd,
        pin: impl Peripheral<P = impl ChannelBPin<T>> + 'd,
    ) -> Self {
        let config = Config::default();
        let pwm = Pwm::new_output_b(slice, pin, config.clone());
        Self::new(pwm, config, PwmOutput::B)
    }

    fn new(pwm: Pwm<'d>, config: Config, output: PwmOutput) -> Self {
        RpPwmSlice {
            pwm,
            config,
            output,
        }
    }

    fn commit(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl<'d> PwmSlice for RpPwmSlice<'d> {
    fn clock_hz(&self) -> u32 {
        clk_sys_freq()
    }

    fn set_divider(&mut self, divider: f32) {
        // 8.4 fixed point, integer dividers are exact
        self.config.divider = FixedU16::<U4>::from_num(divider);
        self.commit();
    }

    fn set_wrap(&mut self, wrap: u16) {
        self.config.top = wrap;
        self.commit();
    }

    fn set_level(&mut self, level: u16) {
        match self.output {
            PwmOutput::A => self.config.compare_a = level,
            PwmOutput::B => self.config.compare_b = level,
        }
        self.commit();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enable = enabled;
        self.commit();
    }
}
