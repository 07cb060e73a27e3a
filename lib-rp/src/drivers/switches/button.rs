pub const LONG_PRESS_TIME_MS: u64 = 1000;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    Pressed,
    Released { held_ms: u64 },
}

impl PressEvent {
    /// True for a release after the button was held strictly longer than `threshold_ms`.
    pub fn is_long_press(&self, threshold_ms: u64) -> bool {
        match self {
            PressEvent::Released { held_ms } => *held_ms > threshold_ms,
            PressEvent::Pressed => false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum BtnState {
    Pressed(u64),
    Released,
}

/// Edge detector for a polled button. Timestamps are any monotonic millisecond clock.
pub struct PressTracker {
    prev_btn_state: BtnState,
}

impl PressTracker {
    pub const fn new() -> Self {
        PressTracker {
            prev_btn_state: BtnState::Released,
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.prev_btn_state, BtnState::Pressed(_))
    }

    pub fn update(&mut self, is_btn_pressed: bool, now_ms: u64) -> Option<PressEvent> {
        match (self.prev_btn_state, is_btn_pressed) {
            (BtnState::Released, true) => {
                self.prev_btn_state = BtnState::Pressed(now_ms);
                Some(PressEvent::Pressed)
            }
            (BtnState::Pressed(pressed_time), false) => {
                self.prev_btn_state = BtnState::Released;
                Some(PressEvent::Released {
                    held_ms: now_ms.saturating_sub(pressed_time),
                })
            }
            // btn state didn't change
            _ => None,
        }
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}
