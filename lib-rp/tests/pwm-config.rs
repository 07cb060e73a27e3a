mod common;

use ateam_lib_rp::drivers::audio::pwm_config::{clamp_volume, tone_in_range, PwmTimerConfig};
use common::RP2040_CLK_SYS_HZ;

fn config(freq_hz: u32, volume: f32) -> PwmTimerConfig {
    PwmTimerConfig::for_tone(RP2040_CLK_SYS_HZ, freq_hz, volume).unwrap()
}

fn expected_level(wrap: u16, volume: f32) -> u16 {
    ((wrap as f64 + 1.0) * 0.5 * clamp_volume(volume) as f64).round() as u16
}

#[test]
fn zero_freq_is_silence() {
    assert_eq!(PwmTimerConfig::for_tone(RP2040_CLK_SYS_HZ, 0, 1.0), None);
}

#[test]
fn beep_tones() {
    let low = config(1400, 0.6);
    assert_eq!(low.divider, 2.0);
    assert_eq!(low.wrap, 44642);
    assert_eq!(low.level, 13393);

    let high = config(1800, 0.6);
    assert_eq!(high.divider, 2.0);
    assert_eq!(high.wrap, 34721);
    assert_eq!(high.level, 10417);
}

#[test]
fn concert_a() {
    let a4 = config(440, 1.0);
    assert_eq!(a4.divider, 5.0);
    assert_eq!(a4.wrap, 56817);
    assert_eq!(a4.level, 28409);
    assert!((a4.output_freq_hz(RP2040_CLK_SYS_HZ) - 440.0).abs() < 0.01);
}

#[test]
fn low_freq_clamps_divider_and_wrap() {
    let c = config(1, 0.5);
    assert_eq!(c.divider, 255.0);
    assert_eq!(c.wrap, u16::MAX);
    assert_eq!(c.level, 16384);
}

#[test]
fn high_freq_keeps_smallest_divider() {
    // 12.5 counts per period, the resolution fallback can't do better than divider 1
    let c = config(10_000_000, 1.0);
    assert_eq!(c.divider, 1.0);
    assert_eq!(c.wrap, 12);
    assert_eq!(c.level, 7);
}

#[test]
fn unreachable_freq_clamps_wrap_to_one() {
    let c = config(u32::MAX, 1.0);
    assert_eq!(c.divider, 1.0);
    assert_eq!(c.wrap, 1);
    assert_eq!(c.level, 1);
}

#[test]
fn zero_clock_does_not_panic() {
    let c = PwmTimerConfig::for_tone(0, 440, 1.0).unwrap();
    assert_eq!(c.divider, 1.0);
    assert_eq!(c.wrap, 1);
}

#[test]
fn divider_and_wrap_stay_in_range() {
    let mut freq_hz: u32 = 1;
    while freq_hz < u32::MAX / 3 {
        let c = config(freq_hz, 1.0);
        assert!((1.0..=255.0).contains(&c.divider), "divider {} at {} Hz", c.divider, freq_hz);
        assert!(c.wrap >= 1, "wrap {} at {} Hz", c.wrap, freq_hz);
        assert_eq!(c.divider.fract(), 0.0);
        assert!(c.level as u32 <= c.duty_resolution());
        freq_hz = freq_hz * 3 + 1;
    }
}

#[test]
fn audible_band_keeps_fine_volume_steps() {
    for freq_hz in (20..=20_000).step_by(37) {
        let c = config(freq_hz, 1.0);
        assert!(c.wrap >= 200, "wrap {} at {} Hz", c.wrap, freq_hz);
    }
}

#[test]
fn level_follows_volume() {
    for freq_hz in [8, 261, 1400, 5000, 100_000] {
        for volume in [0.0, 0.1, 0.25, 0.6, 0.7, 0.99, 1.0] {
            let c = config(freq_hz, volume);
            assert_eq!(c.level, expected_level(c.wrap, volume));
        }
    }
}

#[test]
fn volume_saturates() {
    assert_eq!(config(1400, -1.0), config(1400, 0.0));
    assert_eq!(config(1400, 5.0), config(1400, 1.0));
    assert_eq!(config(1400, f32::NAN).level, 0);
    assert_eq!(config(1400, 0.0).level, 0);
}

#[test]
fn range_check() {
    assert!(tone_in_range(RP2040_CLK_SYS_HZ, 0));
    assert!(!tone_in_range(RP2040_CLK_SYS_HZ, 1));
    assert!(!tone_in_range(RP2040_CLK_SYS_HZ, 7));
    assert!(tone_in_range(RP2040_CLK_SYS_HZ, 8));
    assert!(tone_in_range(RP2040_CLK_SYS_HZ, 1400));
    assert!(tone_in_range(RP2040_CLK_SYS_HZ, 62_500_000));
    assert!(!tone_in_range(RP2040_CLK_SYS_HZ, 62_500_001));
}
