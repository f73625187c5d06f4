//! Status LED shared between the alarm and the blink task
//!
//! The alarm owns the LED through its `Led` collaborator while the blink
//! task toggles it on every timer period. Both go through a critical
//! section mutex held for a single pin write.

use core::cell::RefCell;

use embassy_rp::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use pirwatch_core::shared::BlinkGate;
use pirwatch_core::traits::Led;
use pirwatch_drivers::GpioLed;

/// Concrete LED driver on the board
pub type StatusLed = GpioLed<Output<'static>, &'static BlinkGate>;

/// Storage for the shared LED
pub type StatusLedCell = Mutex<CriticalSectionRawMutex, RefCell<StatusLed>>;

/// Handle onto the shared status LED
#[derive(Clone, Copy)]
pub struct SharedLed {
    cell: &'static StatusLedCell,
}

impl SharedLed {
    /// Create a handle onto the LED cell
    pub fn new(cell: &'static StatusLedCell) -> Self {
        Self { cell }
    }

    /// Blink timer period elapsed
    pub fn on_timer_elapsed(&self) {
        self.with(|led| led.on_timer_elapsed());
    }

    fn with<R>(&self, f: impl FnOnce(&mut StatusLed) -> R) -> R {
        self.cell.lock(|led| f(&mut led.borrow_mut()))
    }
}

impl Led for SharedLed {
    fn init(&mut self) {
        self.with(|led| led.init());
    }

    fn turn_on(&mut self) {
        self.with(|led| led.turn_on());
    }

    fn turn_off(&mut self) {
        self.with(|led| led.turn_off());
    }

    fn toggle(&mut self) {
        self.with(|led| led.toggle());
    }

    fn status(&self) -> bool {
        self.with(|led| led.status())
    }

    fn start_blink_timer(&mut self) {
        self.with(|led| led.start_blink_timer());
    }

    fn stop_blink_timer(&mut self) {
        self.with(|led| led.stop_blink_timer());
    }
}
