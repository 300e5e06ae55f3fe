//! Shared Cells
//!
//! Single-slot, last-write-wins cells that carry data between the periodic
//! tasks. A cell always holds exactly one value: `put` overwrites it, `get`
//! copies it out. Nothing is queued and nobody ever waits for a value.
//!
//! Every cell starts with a defined value, so a task that runs before its
//! producer has published anything still reads something sensible:
//! - distances: [`FAR_SENTINEL_CM`]
//! - duty cycles: 0 (brake)
//! - turn flag: false
//!
//! # Data Flow
//! ```text
//! sensor_scan ── us_distance, ir_distance ──▶ process_sensor_data
//! process_sensor_data ── m1_duty, turn ──▶ motor_actuate (turning motor)
//! process_sensor_data ── m2_duty ────────▶ motor_actuate (fixed motor)
//! ```

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::system::config::FAR_SENTINEL_CM;

/// A single value shared between tasks
///
/// Each access runs inside a critical section, which is all the locking a
/// single `Copy` scalar needs.
pub struct Share<T: Copy> {
    cell: Mutex<CriticalSectionRawMutex, Cell<T>>,
}

impl<T: Copy> Share<T> {
    /// Creates a cell holding `initial`
    pub const fn new(initial: T) -> Self {
        Self {
            cell: Mutex::new(Cell::new(initial)),
        }
    }

    /// Overwrites the current value
    pub fn put(&self, value: T) {
        self.cell.lock(|cell| cell.set(value));
    }

    /// Returns the most recently written value
    pub fn get(&self) -> T {
        self.cell.lock(|cell| cell.get())
    }
}

/// All cells of the control loop
pub struct Shares {
    /// Latest ultrasonic distance in cm, written by the sensor scan task
    pub us_distance: Share<f32>,
    /// Latest infrared distance in cm, written by the sensor scan task
    pub ir_distance: Share<f32>,
    /// Commanded duty cycle of the turning motor (motor 1)
    pub m1_duty: Share<u8>,
    /// Commanded duty cycle of the fixed-direction motor (motor 2)
    pub m2_duty: Share<u8>,
    /// Whether the turning motor should reverse to pivot the car
    pub turn: Share<bool>,
}

impl Shares {
    /// Creates the cells with their safe initial values
    pub const fn new() -> Self {
        Self {
            us_distance: Share::new(FAR_SENTINEL_CM),
            ir_distance: Share::new(FAR_SENTINEL_CM),
            m1_duty: Share::new(0),
            m2_duty: Share::new(0),
            turn: Share::new(false),
        }
    }
}

/// The cells used by the firmware tasks
pub static SHARES: Shares = Shares::new();
