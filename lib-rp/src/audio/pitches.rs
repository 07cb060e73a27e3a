// Equal temperament, A4 = 440 Hz, truncated to whole Hz.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pitch {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
    D5,
    E5,
    F5,
    G5,
    A5,
    B5,
}

impl Pitch {
    pub const fn freq_hz(self) -> u32 {
        match self {
            Pitch::C4 => 261,
            Pitch::D4 => 293,
            Pitch::E4 => 329,
            Pitch::F4 => 349,
            Pitch::G4 => 392,
            Pitch::A4 => 440,
            Pitch::B4 => 493,
            Pitch::C5 => 523,
            Pitch::D5 => 587,
            Pitch::E5 => 659,
            Pitch::F5 => 698,
            Pitch::G5 => 784,
            Pitch::A5 => 880,
            Pitch::B5 => 987,
        }
    }
}
