//! Firmware entry point: one task feeds button presses into the input latch,
//! the other runs the game loop and drives the LED matrix.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use timesup::{
    DpadButtons,
    GameConfig,
    GameController,
    HardwareEntropy,
    InputLatch,
    LedMatrix,
    input::pump,
    mk_static,
    present,
    split_resources,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

/// Written by the input task, read once per tick by the game task.
static INPUT: InputLatch = InputLatch::new();

#[embassy_executor::task]
async fn input_task(buttons: &'static mut DpadButtons) {
    info!("Input task started");
    pump(buttons, &INPUT).await;
}

#[embassy_executor::task]
async fn game_task(matrix: &'static mut LedMatrix<'static>, mut entropy: HardwareEntropy) {
    let config = GameConfig::DEFAULT;
    let tick_period = Duration::from_micros(config.tick_period.ticks());
    let mut controller = GameController::new(config, &INPUT, timesup::now());

    info!("Game task started");
    // A press during the splash starts the first round straight after it.
    present(matrix, controller.boot_frame()).await;
    Timer::after(Duration::from_micros(config.end_delay.ticks())).await;

    loop {
        let frame = controller.tick(timesup::now(), &mut entropy);
        present(matrix, frame).await;
        Timer::after(tick_period).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = timesup::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let buttons = mk_static!(DpadButtons, resources.buttons.into());
    let matrix = mk_static!(LedMatrix<'static>, resources.matrix.into());

    spawner.must_spawn(input_task(buttons));
    spawner.must_spawn(game_task(matrix, HardwareEntropy::new()));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
