use heapless::Vec;

pub const MELODY_CAPACITY: usize = 64;

/// One step of a melody. A frequency of 0 is a rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub freq_hz: u32,
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(freq_hz: u32, duration_ms: u32) -> Self {
        Note { freq_hz, duration_ms }
    }

    pub const fn rest(duration_ms: u32) -> Self {
        Note { freq_hz: 0, duration_ms }
    }

    pub const fn is_rest(&self) -> bool {
        self.freq_hz == 0
    }
}

pub type Melody = Vec<Note, MELODY_CAPACITY>;
