//! Decision Task
//!
//! Runs the [`DecisionEngine`] on the latest distance readings and publishes
//! the resulting motor commands.
//!
//! # Cool-down
//! When the engine commands a fresh stop, the task publishes the zero duty
//! cycles and then sleeps for the requested cool-down before evaluating
//! again. New readings are ignored during that time so the car can coast to a
//! standstill before a turn is attempted. Afterwards the ticker is re-armed
//! instead of catching up on the ticks it missed.
//!
//! Runs on the lowest-priority executor: its output is consumed at the motor
//! tasks' own pace anyway.

use embassy_time::{Ticker, Timer};

use crate::system::config::DriveConfig;
use crate::system::decision::{Decision, DecisionEngine};
use crate::system::shares::Shares;

/// Evaluates one tick against the shared cells
///
/// Reads both distances, runs the engine and publishes `m1_duty`, `m2_duty`
/// and `turn`. Enforcing [`Decision::cooldown`] is up to the caller.
pub fn step(engine: &mut DecisionEngine, shares: &Shares) -> Decision {
    let us_cm = shares.us_distance.get();
    let ir_cm = shares.ir_distance.get();

    let decision = engine.evaluate(us_cm, ir_cm);

    shares.m1_duty.put(decision.m1_duty);
    shares.m2_duty.put(decision.m2_duty);
    shares.turn.put(decision.turn);
    decision
}

/// Decision loop, never returns
pub async fn run(config: DriveConfig, shares: &Shares) {
    info!("Decision engine started");
    let mut engine = DecisionEngine::new(config);
    let mut ticker = Ticker::every(config.decision_period);

    loop {
        let previous = engine.state();
        let decision = step(&mut engine, shares);

        if engine.state() != previous {
            info!("Vehicle state {} -> {}", previous, engine.state());
        }
        if decision.turn {
            debug!("Attempting turn");
        }

        if let Some(cooldown) = decision.cooldown {
            info!("Stopped, holding for {} ms", cooldown.as_millis());
            Timer::after(cooldown).await;
            ticker.reset();
        }

        ticker.next().await;
    }
}

/// Firmware decision task
#[cfg(feature = "rp")]
#[embassy_executor::task]
pub async fn process_sensor_data() {
    use crate::system::shares::SHARES;

    run(DriveConfig::new(), &SHARES).await
}
