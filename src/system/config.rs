//! Drive Configuration
//!
//! Thresholds, speed levels, smoothing weight and task periods for the
//! control loop. The defaults reproduce the reference tuning of the car:
//!
//! | Setting | Default |
//! | ------- | ------- |
//! | far threshold (ultrasonic) | 40 cm |
//! | near threshold (infrared) | 20 cm |
//! | full speed duty | 255 |
//! | partial speed duty | 200 |
//! | stop cool-down | 5 s |
//! | smoothing weight | 0.9 |
//! | task period | 60 ms |

use embassy_time::Duration;

/// Nominal tick unit shared by all periodic tasks
pub const TICK_PERIOD: Duration = Duration::from_millis(60);

/// Initial value of both distance cells before the first sample is published.
///
/// Far enough to land in the full-speed branch, so the car starts out driving
/// rather than braking on an unset reading.
pub const FAR_SENTINEL_CM: f32 = 400.0;

/// Tunable parameters of the decision engine and the motor tasks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveConfig {
    /// Ultrasonic distance above which the path counts as clear (cm)
    pub far_threshold_cm: f32,
    /// Infrared distance above which the car may keep rolling slowly (cm)
    pub near_threshold_cm: f32,
    /// Duty cycle for an open path
    pub full_speed: u8,
    /// Duty cycle for approaching an obstacle, and for turn attempts
    pub partial_speed: u8,
    /// Pause after a full stop while the car coasts to a standstill
    pub stop_cooldown: Duration,
    /// Weight of the previous smoothed speed, clamped to
    /// `[0, ALPHA_MAX]` by the motor tasks
    ///
    /// [`ALPHA_MAX`]: crate::system::motor::ALPHA_MAX
    pub smoothing: f32,
    /// Sensor sampling period
    pub sample_period: Duration,
    /// Decision engine period
    pub decision_period: Duration,
    /// Motor actuation period
    pub motor_period: Duration,
}

impl DriveConfig {
    /// Reference configuration
    pub const fn new() -> Self {
        Self {
            far_threshold_cm: 40.0,
            near_threshold_cm: 20.0,
            full_speed: 255,
            partial_speed: 200,
            stop_cooldown: Duration::from_secs(5),
            smoothing: 0.9,
            sample_period: TICK_PERIOD,
            decision_period: TICK_PERIOD,
            motor_period: TICK_PERIOD,
        }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self::new()
    }
}
