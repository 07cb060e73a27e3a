#![no_std]
#![no_main]

use ateam_buzzer_board::tasks::feedback_task::new_tone_player;
use ateam_lib_rp::{audio::songs::SongId, drivers::audio::PlayTone};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
// provide embedded panic probe
use panic_probe as _;

const SWEEP_FREQS_HZ: [u32; 8] = [50, 100, 261, 440, 1400, 4000, 8000, 12_000];
const SWEEP_VOLUMES: [f32; 4] = [0.1, 0.3, 0.6, 1.0];

#[embassy_executor::main]
async fn main(_main_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    defmt::info!("embassy HAL configured.");

    let mut tone_player = new_tone_player(p.PWM_SLICE1, p.PIN_2);

    tone_player.beep_default();
    tone_player.rest(500);

    for freq_hz in SWEEP_FREQS_HZ {
        if !tone_player.audio_driver().can_play_tone(freq_hz) {
            defmt::warn!("{} Hz is outside the buzzer range", freq_hz);
        }

        for volume in SWEEP_VOLUMES {
            defmt::info!("{} Hz at volume {}", freq_hz, volume);
            tone_player.play_tone(freq_hz, 200, volume);
            tone_player.rest(50);
        }
    }

    for song in SongId::ALL {
        defmt::info!("playing {}", song);
        tone_player.play_song(song);
        tone_player.rest(1000);
    }

    defmt::info!("piezo test complete");

    loop {
        Timer::after_millis(1000).await;
    }
}
