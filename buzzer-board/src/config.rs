use ateam_lib_rp::{audio::songs::SongId, drivers::switches::button::LONG_PRESS_TIME_MS};

pub const BUTTON_POLL_INTERVAL_MS: u64 = 5;

// feedback for the press itself, shorter and louder than the startup chirp
pub const PRESS_BEEP_MS: u32 = 50;
pub const PRESS_BEEP_VOLUME: f32 = 0.7;

pub const LONG_PRESS_MS: u64 = LONG_PRESS_TIME_MS;
pub const LONG_PRESS_SONG: SongId = SongId::OdeToJoy;
pub const LONG_PRESS_SONG_TEMPO_BPM: u32 = 120;
pub const LONG_PRESS_SONG_GAP_MS: u32 = 10;
pub const LONG_PRESS_SONG_VOLUME: f32 = 0.7;
