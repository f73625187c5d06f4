//! Pirwatch - PIR Alarm Firmware
//!
//! Main firmware binary for RP2040-based alarm boards. A PIR sensor arms
//! the alarm, the button disarms it, and the status LED blinks while armed.
//!
//! All control logic lives in the alarm state machine; this binary only
//! wires pins to the shared cells and spawns the tasks that feed it.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_sync::blocking_mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pirwatch_core::AlarmFsm;
use pirwatch_drivers::{EdgeButton, GpioLed, LatchedPir};

use crate::channels::{BLINK_GATE, BUTTON_EDGES, CLOCK, PRESENCE};
use crate::led::{SharedLed, StatusLedCell};

mod channels;
mod config;
mod led;
mod tasks;

// LED shared by the alarm and the blink task (must live forever)
static STATUS_LED: StaticCell<StatusLedCell> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pirwatch firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Pin assignments are board-specific (see config module)
    let led_pin = Output::new(p.PIN_25, Level::Low);
    let button_pin = Input::new(p.PIN_14, Pull::Up);
    let pir_pin = Input::new(p.PIN_15, Pull::Down);

    let led = GpioLed::new(led_pin, &BLINK_GATE, config::LED_POLARITY);
    let status_led = SharedLed::new(STATUS_LED.init(Mutex::new(RefCell::new(led))));

    // Construction initialises every collaborator once; a bad table is fatal
    let alarm = unwrap!(AlarmFsm::new(
        EdgeButton::new(&BUTTON_EDGES),
        status_led,
        LatchedPir::new(&PRESENCE),
        &CLOCK,
    ));
    info!("Alarm initialized");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::button_task(button_pin, tasks::ButtonConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::pir_task(pir_pin, tasks::PirConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::blink_task(status_led, tasks::BlinkConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::alarm_task(alarm, tasks::AlarmTaskConfig::default()))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
