use libm::{ceil, round};
use num_traits::clamp;

pub const PWM_DIVIDER_MIN: f64 = 1.0;
pub const PWM_DIVIDER_MAX: f64 = 255.0;

pub const PWM_WRAP_MIN: u16 = 1;
pub const PWM_WRAP_MAX: u16 = u16::MAX;

// counter values available to a 16 bit wrap register
const PWM_COUNTER_SPAN: f64 = 65536.0;

/// Wraps below this leave too few duty levels for smooth volume control.
pub const PWM_WRAP_LOW_RESOLUTION: f64 = 200.0;
const PWM_RESOLUTION_TARGET: f64 = 400.0;

// 50% is the loudest a square wave gets, volume scales down from there
const NOMINAL_DUTY: f64 = 0.5;

/// Saturates a volume into [0.0, 1.0]. NaN is silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        clamp(volume, 0.0, 1.0)
    }
}

/// Timer settings producing one tone at one volume.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTimerConfig {
    pub divider: f32,
    pub wrap: u16,
    pub level: u16,
}

impl PwmTimerConfig {
    pub const IDLE_DIVIDER: f32 = 1.0;

    /// Computes the slice configuration for `freq_hz` driven from a `clk_hz` clock.
    ///
    /// The divider is the smallest one that keeps the period inside the wrap
    /// register. When that leaves a wrap under 200 counts a second divider
    /// aiming at 400 counts is tried. Out of range values are clamped, never
    /// rejected. Returns `None` for a frequency of 0 (silence).
    pub fn for_tone(clk_hz: u32, freq_hz: u32, volume: f32) -> Option<Self> {
        if freq_hz == 0 {
            return None;
        }

        let clk = clk_hz as f64;
        let freq = freq_hz as f64;

        let mut divider = clamp(ceil(clk / (freq * PWM_COUNTER_SPAN)), PWM_DIVIDER_MIN, PWM_DIVIDER_MAX);
        let mut wrap = clk / (divider * freq) - 1.0;

        if wrap < PWM_WRAP_LOW_RESOLUTION && divider < PWM_DIVIDER_MAX {
            let candidate = ceil(clk / (freq * PWM_RESOLUTION_TARGET));
            if (PWM_DIVIDER_MIN..=PWM_DIVIDER_MAX).contains(&candidate) {
                divider = candidate;
                wrap = clk / (divider * freq) - 1.0;
            }
        }

        let wrap = round(clamp(wrap, PWM_WRAP_MIN as f64, PWM_WRAP_MAX as f64)) as u16;

        Some(PwmTimerConfig {
            divider: divider as f32,
            wrap,
            level: Self::duty_level(wrap, volume),
        })
    }

    /// Compare level giving the nominal duty cycle scaled by `volume`.
    pub fn duty_level(wrap: u16, volume: f32) -> u16 {
        let volume = clamp_volume(volume) as f64;
        round((wrap as f64 + 1.0) * NOMINAL_DUTY * volume) as u16
    }

    /// Number of distinct duty levels, i.e. volume steps.
    pub fn duty_resolution(&self) -> u32 {
        self.wrap as u32 + 1
    }

    /// Frequency the slice actually outputs with this configuration.
    pub fn output_freq_hz(&self, clk_hz: u32) -> f32 {
        (clk_hz as f64 / (self.divider as f64 * self.duty_resolution() as f64)) as f32
    }
}

/// True if `freq_hz` is reachable from `clk_hz` without clamping the divider or the wrap.
pub fn tone_in_range(clk_hz: u32, freq_hz: u32) -> bool {
    if freq_hz == 0 {
        return true;
    }

    let clk = clk_hz as f64;
    let freq = freq_hz as f64;

    let divider = ceil(clk / (freq * PWM_COUNTER_SPAN));
    if divider > PWM_DIVIDER_MAX {
        return false;
    }

    let divider = if divider < PWM_DIVIDER_MIN { PWM_DIVIDER_MIN } else { divider };
    clk / (divider * freq) - 1.0 >= PWM_WRAP_MIN as f64
}
