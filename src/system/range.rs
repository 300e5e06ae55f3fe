//! Range Sensor Conversions
//!
//! Raw-to-centimeter conversions for the two distance sensors.
//!
//! # Ultrasonic (HC-SR04)
//! - 10 us trigger pulse, then the echo pin is held high for the round trip
//! - 58.2 us of echo per cm
//! - Echo wait is bounded to 30 ms; a missing echo reports 0 cm
//!
//! # Infrared (Sharp GP2Y0A21-type analog sensor)
//! - Output voltage falls with distance along a hyperbola
//! - Calibrated as `cm = 5269.8 / (raw - 136.88)` for 10-bit ADC counts; the
//!   RP2350's 12-bit samples are scaled down to that range first
//! - Result is truncated to whole centimeters
//!
//! No plausibility checks happen here: an out-of-range sample yields an
//! out-of-range distance (very large near the curve's pole, negative below it).

use embassy_time::Duration;

/// Upper bound on the echo pulse wait
pub const ECHO_TIMEOUT: Duration = Duration::from_millis(30);

/// Echo duration per centimeter of distance, in microseconds
const ECHO_US_PER_CM: f32 = 58.2;

/// Infrared calibration curve numerator
const IR_CURVE_GAIN: f32 = 5269.8;

/// Infrared calibration curve offset, in 10-bit ADC counts
const IR_CURVE_OFFSET: f32 = 136.88;

/// Bits dropped to bring a 12-bit sample to the 10-bit calibration range
const ADC_CALIBRATION_SHIFT: u16 = 2;

/// Converts a measured echo pulse to cm, `None` meaning the wait timed out
pub fn echo_to_cm(echo: Option<Duration>) -> f32 {
    match echo {
        Some(pulse) => pulse.as_micros() as f32 / ECHO_US_PER_CM,
        None => 0.0,
    }
}

/// Converts a 12-bit ADC sample of the infrared sensor output to cm
pub fn ir_counts_to_cm(raw: u16) -> f32 {
    let counts = f32::from(raw >> ADC_CALIBRATION_SHIFT);
    // truncate toward zero, saturating near the pole
    (IR_CURVE_GAIN / (counts - IR_CURVE_OFFSET)) as i32 as f32
}
