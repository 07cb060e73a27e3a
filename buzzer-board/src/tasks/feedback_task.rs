use ateam_lib_rp::{
    audio::tone_player::TonePlayer,
    drivers::{audio::buzzer::Buzzer, switches::button::{PressEvent, PressTracker}},
};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Delay, Instant, Timer};

use crate::{
    config::*,
    pins::{BuzzerPin, BuzzerSlice, UserButtonPin},
    rp_pwm::RpPwmSlice,
};

pub type BuzzerTonePlayer = TonePlayer<Buzzer<RpPwmSlice<'static>>, Delay>;

#[macro_export]
macro_rules! create_feedback_task {
    ($main_spawner:ident, $p:ident) => {
        ateam_buzzer_board::tasks::feedback_task::start_feedback_task(
            &$main_spawner, $p.PWM_SLICE1, $p.PIN_2, $p.PIN_15
        );
    };
}

pub fn new_tone_player(buzzer_slice: BuzzerSlice, buzzer_pin: BuzzerPin) -> BuzzerTonePlayer {
    let pwm = RpPwmSlice::new_output_a(buzzer_slice, buzzer_pin);
    TonePlayer::new(Buzzer::new(pwm), Delay)
}

#[embassy_executor::task]
async fn feedback_task_entry(
    mut tone_player: BuzzerTonePlayer,
    user_button: Input<'static>,
) {
    let mut press_tracker = PressTracker::new();

    // startup chirp
    tone_player.beep_default();

    loop {
        let now_ms = Instant::now().as_millis();
        match press_tracker.update(user_button.is_low(), now_ms) {
            Some(PressEvent::Pressed) => {
                defmt::trace!("button pressed");
                tone_player.beep(PRESS_BEEP_MS, PRESS_BEEP_VOLUME);
            }
            Some(release) if release.is_long_press(LONG_PRESS_MS) => {
                defmt::info!("long press {}, playing {}", release, LONG_PRESS_SONG);
                let melody = LONG_PRESS_SONG.melody(LONG_PRESS_SONG_TEMPO_BPM);
                tone_player.play_melody(&melody, LONG_PRESS_SONG_GAP_MS, LONG_PRESS_SONG_VOLUME);
            }
            _ => {}
        }

        Timer::after_millis(BUTTON_POLL_INTERVAL_MS).await;
    }
}

pub fn start_feedback_task(
    task_spawner: &Spawner,
    buzzer_slice: BuzzerSlice,
    buzzer_pin: BuzzerPin,
    user_button_pin: UserButtonPin,
) {
    let tone_player = new_tone_player(buzzer_slice, buzzer_pin);
    let user_button = Input::new(user_button_pin, Pull::Up);

    task_spawner.spawn(feedback_task_entry(tone_player, user_button)).unwrap();
}
