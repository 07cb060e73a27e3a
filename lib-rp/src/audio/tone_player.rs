use embedded_hal::delay::DelayNs;

use crate::drivers::audio::PlayTone;
use super::{note::Note, songs::SongId, DEFAULT_BEEP_MS, DEFAULT_GAP_MS, DEFAULT_VOLUME};

pub const BEEP_FIRST_FREQ_HZ: u32 = 1400;
pub const BEEP_SECOND_FREQ_HZ: u32 = 1800;

/// Blocking sequencer. Every call returns with the output silent.
pub struct TonePlayer<D: PlayTone, T: DelayNs> {
    audio_driver: D,
    delay: T,
}

impl<D: PlayTone, T: DelayNs> TonePlayer<D, T> {
    pub fn new(audio_driver: D, delay: T) -> Self {
        TonePlayer {
            audio_driver,
            delay,
        }
    }

    pub fn audio_driver(&mut self) -> &mut D {
        &mut self.audio_driver
    }

    pub fn play_tone(&mut self, freq_hz: u32, duration_ms: u32, volume: f32) {
        self.audio_driver.start_tone(freq_hz, volume);
        self.delay.delay_ms(duration_ms);
        self.audio_driver.stop_tone();
    }

    pub fn rest(&mut self, duration_ms: u32) {
        self.audio_driver.stop_tone();
        self.delay.delay_ms(duration_ms);
    }

    /// Rising two tone acknowledgement. Takes about 2.3x `duration_ms`.
    pub fn beep(&mut self, duration_ms: u32, volume: f32) {
        self.play_tone(BEEP_FIRST_FREQ_HZ, duration_ms, volume);
        self.rest(duration_ms / 3);
        self.play_tone(BEEP_SECOND_FREQ_HZ, duration_ms, volume);
    }

    pub fn beep_default(&mut self) {
        self.beep(DEFAULT_BEEP_MS, DEFAULT_VOLUME);
    }

    /// Plays every note once, in order, then `gap_ms` of silence after each one
    /// (the last included). A gap of 0 disables the silence.
    pub fn play_melody(&mut self, melody: &[Note], gap_ms: u32, volume: f32) {
        for note in melody.iter() {
            if note.is_rest() {
                self.rest(note.duration_ms);
            } else {
                if !self.audio_driver.can_play_tone(note.freq_hz) {
                    warn!("{} Hz is outside the buzzer range, playing clamped", note.freq_hz);
                }
                self.play_tone(note.freq_hz, note.duration_ms, volume);
            }

            if gap_ms > 0 {
                self.rest(gap_ms);
            }
        }
    }

    pub fn play_song(&mut self, song: SongId) {
        let melody = song.melody(song.default_tempo_bpm());
        debug!("playing song {} ({} notes)", song, melody.len());
        self.play_melody(&melody, DEFAULT_GAP_MS, DEFAULT_VOLUME);
    }
}
