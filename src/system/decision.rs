//! Decision Engine
//!
//! Turns the latest ultrasonic and infrared distances into drive commands for
//! both motors. The rules are checked in strict priority order on every tick:
//!
//! 1. ultrasonic distance beyond the far threshold: full speed
//! 2. infrared distance beyond the near threshold: partial speed
//! 3. both close, car still running: full stop, then cool down
//! 4. both close, car already stopped: partial speed with the turn flag set
//!
//! The ultrasonic rule always wins. An obstacle the ultrasonic sensor misses
//! (thin or sound-absorbing objects) is not caught by the infrared sensor
//! while the ultrasonic reading is far.
//!
//! The engine is a plain state machine with no notion of time. A full stop
//! only *requests* a cool-down through [`Decision::cooldown`]; the decision
//! task enforces it.

use embassy_time::Duration;

use crate::system::config::DriveConfig;
use crate::system::state::VehicleState;

/// Drive commands produced by one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decision {
    /// Duty cycle for the turning motor (motor 1)
    pub m1_duty: u8,
    /// Duty cycle for the fixed-direction motor (motor 2)
    pub m2_duty: u8,
    /// Whether the turning motor should reverse
    pub turn: bool,
    /// Pause to hold before the next evaluation, set only on a fresh stop
    pub cooldown: Option<Duration>,
}

impl Decision {
    fn drive(duty: u8, turn: bool) -> Self {
        Self {
            m1_duty: duty,
            m2_duty: duty,
            turn,
            cooldown: None,
        }
    }

    fn stop(cooldown: Duration) -> Self {
        Self {
            m1_duty: 0,
            m2_duty: 0,
            turn: false,
            cooldown: Some(cooldown),
        }
    }
}

/// Priority state machine over the two distance readings
pub struct DecisionEngine {
    config: DriveConfig,
    state: VehicleState,
}

impl DecisionEngine {
    /// Creates an engine in the [`VehicleState::Running`] state
    pub const fn new(config: DriveConfig) -> Self {
        Self {
            config,
            state: VehicleState::Running,
        }
    }

    /// Current vehicle state
    pub fn state(&self) -> VehicleState {
        self.state
    }

    /// Evaluates one tick
    ///
    /// # Arguments
    /// * `us_cm` - latest ultrasonic distance in cm
    /// * `ir_cm` - latest infrared distance in cm
    ///
    /// Readings are used as-is. A sentinel from a failed read (0, NaN, a huge
    /// value) is treated like any other number; NaN fails both threshold checks
    /// and lands in the close-range branch.
    pub fn evaluate(&mut self, us_cm: f32, ir_cm: f32) -> Decision {
        if us_cm > self.config.far_threshold_cm {
            self.state = VehicleState::Running;
            Decision::drive(self.config.full_speed, false)
        } else if ir_cm > self.config.near_threshold_cm {
            self.state = VehicleState::Running;
            Decision::drive(self.config.partial_speed, false)
        } else if self.state.is_stopped() {
            // Stays Stopped: only the two distance branches lead back to Running
            Decision::drive(self.config.partial_speed, true)
        } else {
            self.state = VehicleState::Stopped;
            Decision::stop(self.config.stop_cooldown)
        }
    }
}
