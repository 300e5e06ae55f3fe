//! Drive Motor
//!
//! [`Actuator`] implementation for one channel of a TB6612FNG dual H-bridge.
//! Generic over the embedded-hal pins, so the RP2350 GPIO/PWM outputs and
//! test doubles plug in alike.
//!
//! # Truth table (IN1, IN2)
//! - clockwise: high, low
//! - counterclockwise: low, high
//! - brake: high, high
//!
//! The shared STBY pin is released once at boot and never touched here.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use tb6612fng::{Motor, MotorError};

use crate::system::io::Actuator;
use crate::system::motor::{drive_command, MotorRole};

/// Why a motor channel could not be brought up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// The PWM slice did not hand out the motor's channel
    PwmUnavailable(MotorRole),
    /// The driver rejected the initial pin state
    Driver(MotorRole),
}

/// One motor channel of the driver
pub struct DriveMotor<IN1, IN2, PWM> {
    motor: Motor<IN1, IN2, PWM>,
}

impl<IN1, IN2, PWM> DriveMotor<IN1, IN2, PWM>
where
    IN1: OutputPin,
    IN2: OutputPin,
    PWM: SetDutyCycle,
{
    /// Takes ownership of the channel's direction inputs and PWM output
    pub fn new(
        in1: IN1,
        in2: IN2,
        pwm: PWM,
    ) -> Result<Self, MotorError<IN1::Error, IN2::Error, PWM::Error>> {
        let motor = Motor::new(in1, in2, pwm)?;
        Ok(Self { motor })
    }

    /// Brings up the channel driving `role`
    ///
    /// Failures are tagged with the motor they belong to, so a boot panic
    /// tells which channel is miswired.
    pub fn setup(
        role: MotorRole,
        in1: IN1,
        in2: IN2,
        pwm: Option<PWM>,
    ) -> Result<Self, SetupError> {
        let pwm = pwm.ok_or(SetupError::PwmUnavailable(role))?;
        Self::new(in1, in2, pwm).map_err(|_| SetupError::Driver(role))
    }
}

impl<IN1, IN2, PWM> Actuator for DriveMotor<IN1, IN2, PWM>
where
    IN1: OutputPin,
    IN2: OutputPin,
    PWM: SetDutyCycle,
{
    type Error = MotorError<IN1::Error, IN2::Error, PWM::Error>;

    fn set(&mut self, duty: u8, clockwise: bool) -> Result<(), Self::Error> {
        self.motor.drive(drive_command(duty, clockwise))
    }
}
