pub mod note;
pub mod pitches;
pub mod songs;
pub mod tone_player;

pub const DEFAULT_VOLUME: f32 = 0.6;
pub const DEFAULT_BEEP_MS: u32 = 60;
pub const DEFAULT_GAP_MS: u32 = 10;
