//! Drive Motors
//!
//! Sets up the TB6612FNG channels for both motors.
//!
//! # PWM
//! 10 kHz on both slices; cheaper DC motors run smoother at lower frequencies
//! than the RP2350 could drive.

use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::{self, Pwm, PwmOutput};

use crate::system::drive_motor::{DriveMotor, SetupError};
use crate::system::motor::MotorRole;
use crate::system::resources::MotorDriverResources;

/// PWM frequency applied to both motors
const PWM_FREQ_HZ: u32 = 10_000;

/// A motor channel wired to RP2350 GPIO and PWM
pub type RpDriveMotor = DriveMotor<Output<'static>, Output<'static>, PwmOutput<'static>>;

/// Both motors plus the driver's standby pin
pub struct DriveMotors {
    /// Held high for the lifetime of the firmware; dropping it puts the
    /// driver into standby
    pub standby: Output<'static>,
    /// Motor 1, the turning motor
    pub m1: RpDriveMotor,
    /// Motor 2, fixed direction
    pub m2: RpDriveMotor,
}

impl DriveMotors {
    /// Configures PWM and direction pins and releases standby
    ///
    /// Fails with the motor whose channel could not be initialised.
    pub fn new(r: MotorDriverResources) -> Result<Self, SetupError> {
        let pwm_config = pwm_config();

        // PIN_28 is channel A of slice 6, PIN_27 channel B of slice 5
        let (m1_pwm, _) = Pwm::new_output_a(r.m1_slice, r.m1_pwm_pin, pwm_config.clone()).split();
        let (_, m2_pwm) = Pwm::new_output_b(r.m2_slice, r.m2_pwm_pin, pwm_config).split();

        let m1 = DriveMotor::setup(
            MotorRole::Turning,
            Output::new(r.m1_in1_pin, Level::Low),
            Output::new(r.m1_in2_pin, Level::Low),
            m1_pwm,
        )?;
        let m2 = DriveMotor::setup(
            MotorRole::Fixed,
            Output::new(r.m2_in1_pin, Level::Low),
            Output::new(r.m2_in2_pin, Level::Low),
            m2_pwm,
        )?;

        let standby = Output::new(r.standby_pin, Level::High);
        info!("Motor driver out of standby");

        Ok(Self { standby, m1, m2 })
    }
}

/// PWM configuration for [`PWM_FREQ_HZ`]
fn pwm_config() -> pwm::Config {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq();

    // Smallest divider that keeps the period within the 16-bit counter
    let divider = ((clock_freq_hz / PWM_FREQ_HZ) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (PWM_FREQ_HZ * divider as u32)) as u16 - 1;

    let mut config = pwm::Config::default();
    config.divider = divider.into();
    config.top = period;
    config
}
