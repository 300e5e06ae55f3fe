//! Motor Actuation Task
//!
//! One instance per motor. Each tick the task reads its motor's commanded
//! duty cycle, smooths it and drives the actuator.
//!
//! - [`MotorRole::Turning`] reads `m1_duty` and the turn flag
//! - [`MotorRole::Fixed`] reads `m2_duty` only
//!
//! The actuator is commanded on every tick, changed or not. A rejected
//! command is logged and simply repeated on the next tick.

use embassy_time::Ticker;

use crate::system::config::DriveConfig;
use crate::system::io::Actuator;
use crate::system::motor::{MotorControl, MotorOutput, MotorRole};
use crate::system::shares::Shares;

/// Reads the command addressed to `role`
///
/// # Returns
/// * `(duty, turn)` - commanded duty cycle and turn flag; the fixed motor
///   never sees the turn flag
pub fn command(shares: &Shares, role: MotorRole) -> (u8, bool) {
    match role {
        MotorRole::Turning => (shares.m1_duty.get(), shares.turn.get()),
        MotorRole::Fixed => (shares.m2_duty.get(), false),
    }
}

/// Runs one actuation tick
pub fn actuate<A: Actuator>(
    control: &mut MotorControl,
    actuator: &mut A,
    shares: &Shares,
) -> Result<MotorOutput, A::Error> {
    let (duty, turn) = command(shares, control.role());
    let output = control.update(duty, turn);
    actuator.set(output.duty, output.clockwise)?;
    Ok(output)
}

/// Motor loop, never returns
pub async fn run<A: Actuator>(
    mut actuator: A,
    role: MotorRole,
    config: DriveConfig,
    shares: &Shares,
) {
    info!("{} motor task started", role);
    let mut control = MotorControl::new(role, config.smoothing);
    let mut ticker = Ticker::every(config.motor_period);

    loop {
        match actuate(&mut control, &mut actuator, shares) {
            Ok(output) => debug!(
                "{} motor - duty: {}, clockwise: {}",
                role,
                output.duty,
                output.clockwise
            ),
            Err(_) => warn!("{} motor rejected command", role),
        }

        ticker.next().await;
    }
}

/// Firmware motor task, spawned once per motor
#[cfg(feature = "rp")]
#[embassy_executor::task(pool_size = 2)]
pub async fn motor_actuate(motor: crate::hw::drive_motors::RpDriveMotor, role: MotorRole) {
    use crate::system::shares::SHARES;

    run(motor, role, DriveConfig::new(), &SHARES).await
}
