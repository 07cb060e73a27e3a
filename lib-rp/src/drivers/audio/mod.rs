pub mod buzzer;
pub mod pwm_config;

/// Register level access to one PWM slice with the buzzer bound to one of its channels.
///
/// Implementations own the slice exclusively. Which channel of the slice the
/// buzzer sits on is fixed when the implementation is constructed from a pin.
pub trait PwmSlice {
    /// Frequency of the clock feeding the slice's divider, in Hz.
    fn clock_hz(&self) -> u32;
    fn set_divider(&mut self, divider: f32);
    fn set_wrap(&mut self, wrap: u16);
    /// Compare level of the bound channel.
    fn set_level(&mut self, level: u16);
    fn set_enabled(&mut self, enabled: bool);
}

pub trait PlayTone {
    /// Start (or switch to) a continuous tone. A frequency of 0 silences the output.
    fn start_tone(&mut self, freq_hz: u32, volume: f32);
    fn stop_tone(&mut self);
    /// True if the tone can be produced without clamping the timer configuration.
    fn can_play_tone(&self, freq_hz: u32) -> bool;
}
