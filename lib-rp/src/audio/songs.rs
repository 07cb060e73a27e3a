use super::{note::{Melody, Note}, pitches::Pitch};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SongId {
    OdeToJoy,
    Twinkle,
}

impl SongId {
    pub const ALL: [SongId; 2] = [SongId::OdeToJoy, SongId::Twinkle];

    pub const fn default_tempo_bpm(self) -> u32 {
        match self {
            SongId::OdeToJoy => 120,
            SongId::Twinkle => 100,
        }
    }

    pub fn melody(self, tempo_bpm: u32) -> Melody {
        match self {
            SongId::OdeToJoy => melody_ode_to_joy(tempo_bpm),
            SongId::Twinkle => melody_twinkle(tempo_bpm),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoteValue {
    Half,
    Quarter,
    Eighth,
}

impl NoteValue {
    pub const fn duration_ms(self, tempo_bpm: u32) -> u32 {
        let quarter_ms = quarter_note_ms(tempo_bpm);
        match self {
            NoteValue::Half => 2 * quarter_ms,
            NoteValue::Quarter => quarter_ms,
            NoteValue::Eighth => quarter_ms / 2,
        }
    }
}

/// Length of one beat. A tempo of 0 is played as 1 bpm.
pub const fn quarter_note_ms(tempo_bpm: u32) -> u32 {
    let tempo_bpm = if tempo_bpm == 0 { 1 } else { tempo_bpm };
    60_000 / tempo_bpm
}

pub type Score = [(Pitch, NoteValue)];

use NoteValue::{Eighth as E, Half as H, Quarter as Q};
use Pitch::*;

pub const ODE_TO_JOY_SCORE: [(Pitch, NoteValue); 30] = [
    (E4, Q), (E4, Q), (F4, Q), (G4, Q),
    (G4, Q), (F4, Q), (E4, Q), (D4, Q),
    (C4, Q), (C4, Q), (D4, Q), (E4, Q),
    (E4, E), (D4, E), (D4, H),
    (E4, Q), (E4, Q), (F4, Q), (G4, Q),
    (G4, Q), (F4, Q), (E4, Q), (D4, Q),
    (C4, Q), (C4, Q), (D4, Q), (E4, Q),
    (D4, Q), (C4, Q), (C4, H),
];

pub const TWINKLE_SCORE: [(Pitch, NoteValue); 42] = [
    (C4, Q), (C4, Q), (G4, Q), (G4, Q),
    (A4, Q), (A4, Q), (G4, H),
    (F4, Q), (F4, Q), (E4, Q), (E4, Q),
    (D4, Q), (D4, Q), (C4, H),
    (G4, Q), (G4, Q), (F4, Q), (F4, Q),
    (E4, Q), (E4, Q), (D4, H),
    (G4, Q), (G4, Q), (F4, Q), (F4, Q),
    (E4, Q), (E4, Q), (D4, H),
    (C4, Q), (C4, Q), (G4, Q), (G4, Q),
    (A4, Q), (A4, Q), (G4, H),
    (F4, Q), (F4, Q), (E4, Q), (E4, Q),
    (D4, Q), (D4, Q), (C4, H),
];

/// Renders a score at the given tempo. Entries past the melody capacity are dropped.
pub fn render_score(score: &Score, tempo_bpm: u32) -> Melody {
    let mut melody = Melody::new();
    for (pitch, value) in score.iter() {
        if melody.push(Note::new(pitch.freq_hz(), value.duration_ms(tempo_bpm))).is_err() {
            warn!("score longer than melody capacity, truncated");
            break;
        }
    }

    melody
}

pub fn melody_ode_to_joy(tempo_bpm: u32) -> Melody {
    render_score(&ODE_TO_JOY_SCORE, tempo_bpm)
}

pub fn melody_twinkle(tempo_bpm: u32) -> Melody {
    render_score(&TWINKLE_SCORE, tempo_bpm)
}
