//! Motor Actuation Logic
//!
//! Per-motor smoothing and direction policy, shared by both motor tasks.
//!
//! # Smoothing
//! Each commanded duty cycle is passed through an exponential moving average
//! so speed changes ramp instead of jumping:
//!
//! ```text
//! speed <- alpha * speed + (1 - alpha) * command
//! ```
//!
//! A command of 0 bypasses the filter and zeroes the speed on the same tick.
//! Braking is immediate, speeding up is gradual.
//!
//! # Direction
//! - [`MotorRole::Turning`] (motor 1): counterclockwise while driving straight,
//!   clockwise when the turn flag is set. Reversing this wheel is what pivots
//!   the car.
//! - [`MotorRole::Fixed`] (motor 2): always clockwise.
//!
//! A braking motor (command 0) reports clockwise; the driver ignores the
//! direction while braking.

use tb6612fng::DriveCommand;

/// Largest duty cycle a motor can be commanded with
pub const DUTY_MAX: u8 = u8::MAX;

/// Which wheel a motor task drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorRole {
    /// Motor 1: follows the turn flag
    Turning,
    /// Motor 2: ignores the turn flag
    Fixed,
}

/// Largest smoothing weight accepted by [`SpeedSmoother::new`]
pub const ALPHA_MAX: f32 = 0.99;

/// First-order exponential smoothing of the commanded duty cycle
#[derive(Debug, Clone, Copy)]
pub struct SpeedSmoother {
    /// Weight of the previous value
    alpha: f32,
    /// Current smoothed speed
    speed: f32,
}

impl SpeedSmoother {
    /// Creates a smoother at standstill
    ///
    /// `alpha` is clamped to `[0, ALPHA_MAX]`; 0 follows the command
    /// directly. A weight of 1 would never leave standstill.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, ALPHA_MAX),
            speed: 0.0,
        }
    }

    /// Current smoothed speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Feeds one command and returns the new smoothed speed
    pub fn update(&mut self, command: u8) -> f32 {
        if command == 0 {
            self.speed = 0.0;
        } else {
            self.speed = self.alpha * self.speed + (1.0 - self.alpha) * f32::from(command);
        }
        self.speed
    }
}

/// What a motor task hands to its actuator on one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorOutput {
    /// Smoothed speed truncated to a duty cycle, 0 brakes
    pub duty: u8,
    /// Drive polarity
    pub clockwise: bool,
}

/// Resolves the drive polarity of a motor
///
/// `command` is the raw commanded duty cycle, not the smoothed one.
pub fn resolve_direction(role: MotorRole, command: u8, turn: bool) -> bool {
    match role {
        MotorRole::Turning => command == 0 || turn,
        MotorRole::Fixed => true,
    }
}

/// Smoothing and direction state of one motor
pub struct MotorControl {
    role: MotorRole,
    smoother: SpeedSmoother,
}

impl MotorControl {
    pub fn new(role: MotorRole, smoothing: f32) -> Self {
        Self {
            role,
            smoother: SpeedSmoother::new(smoothing),
        }
    }

    pub fn role(&self) -> MotorRole {
        self.role
    }

    /// Current smoothed speed
    pub fn speed(&self) -> f32 {
        self.smoother.speed()
    }

    /// Computes this tick's output from the latest command
    ///
    /// `turn` only matters for [`MotorRole::Turning`].
    pub fn update(&mut self, command: u8, turn: bool) -> MotorOutput {
        let speed = self.smoother.update(command);
        MotorOutput {
            // float to int casts truncate toward zero and saturate
            duty: speed as u8,
            clockwise: resolve_direction(self.role, command, turn),
        }
    }
}

/// Maps a duty cycle and polarity onto a TB6612FNG drive command
///
/// The driver takes speed as a percentage, so `0..=255` is rescaled to
/// `0..=100`, rounding up so every nonzero duty keeps the motor driven.
/// Duty 0 brakes (both inputs high) whatever the direction.
pub fn drive_command(duty: u8, clockwise: bool) -> DriveCommand {
    if duty == 0 {
        return DriveCommand::Brake;
    }
    let percent = (u16::from(duty) * 100).div_ceil(u16::from(DUTY_MAX)) as u8;
    if clockwise {
        DriveCommand::Forward(percent)
    } else {
        DriveCommand::Backward(percent)
    }
}
