//! Vehicle State
//!
//! The single piece of memory the decision engine carries from one tick to
//! the next. It is owned by [`DecisionEngine`](crate::system::decision::DecisionEngine)
//! and never shared with other tasks.
//!
//! # Transitions
//! - any state -> `Running`: the ultrasonic path is clear, or the infrared
//!   reading is beyond the near threshold
//! - `Running` -> `Stopped`: both sensors report a close obstacle
//! - `Stopped` -> `Stopped`: both sensors still report a close obstacle; a
//!   turn is attempted instead of another stop

/// Motion state of the car as seen by the decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VehicleState {
    /// Car is moving, or at least was allowed to on the last tick
    /// - Initial state at power-up
    /// - A close obstacle leads to a full stop
    Running,
    /// Car was brought to a full stop
    /// - A close obstacle now leads to a turn attempt
    Stopped,
}

impl VehicleState {
    /// Returns true once the car has been commanded to a full stop
    pub fn is_stopped(&self) -> bool {
        *self == VehicleState::Stopped
    }
}
