#![no_std]
#![no_main]

use ateam_buzzer_board::create_feedback_task;
use defmt_rtt as _;
use embassy_executor::Spawner;
use panic_probe as _;

#[embassy_executor::main]
async fn main(main_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    defmt::info!("embassy HAL configured.");

    ///////////////////
    //  start tasks  //
    ///////////////////

    create_feedback_task!(main_spawner, p);
}
