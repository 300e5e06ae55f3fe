//! Hardware Seams
//!
//! The control loop talks to the outside world through two traits: a source
//! of distance readings and a motor actuator. The RP2350 bindings live in
//! `hw`, tests provide their own.

/// Produces the two distance readings the decision engine works with
///
/// Both reads complete in bounded time. A failed read is reported as a
/// sentinel number (0 on echo timeout), never as an error.
#[allow(async_fn_in_trait)]
pub trait DistanceSource {
    /// Distance to the nearest echo, in cm
    async fn read_ultrasonic_cm(&mut self) -> f32;
    /// Distance derived from the infrared sensor output, in cm
    async fn read_infrared_cm(&mut self) -> f32;
}

/// Drives one motor
pub trait Actuator {
    type Error;

    /// Applies a duty cycle and polarity
    ///
    /// `duty == 0` brakes the motor irrespective of `clockwise`.
    fn set(&mut self, duty: u8, clockwise: bool) -> Result<(), Self::Error>;
}
