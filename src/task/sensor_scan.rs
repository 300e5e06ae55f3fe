//! Sensor Scan Task
//!
//! Samples both distance sensors once per period and publishes the readings.
//!
//! # Operation
//! - Ultrasonic first, then infrared, each from the [`DistanceSource`]
//! - Both cells are overwritten unconditionally, no filtering or clamping
//! - Runs on the highest-priority executor so readings see the least jitter
//!
//! # Timing
//! The period is measured from the previous wake-up, not from the end of the
//! work, so a slow echo does not make the schedule drift.

use embassy_time::{Duration, Ticker};

use crate::system::io::DistanceSource;
use crate::system::shares::Shares;

/// Takes one pair of readings and publishes them
///
/// # Returns
/// * `(us_cm, ir_cm)` - the readings as published
pub async fn sample<S: DistanceSource>(source: &mut S, shares: &Shares) -> (f32, f32) {
    let us_cm = source.read_ultrasonic_cm().await;
    let ir_cm = source.read_infrared_cm().await;
    shares.us_distance.put(us_cm);
    shares.ir_distance.put(ir_cm);
    (us_cm, ir_cm)
}

/// Sensor scan loop, never returns
pub async fn run<S: DistanceSource>(mut source: S, shares: &Shares, period: Duration) {
    info!("Sensor scan started, period {} ms", period.as_millis());
    let mut ticker = Ticker::every(period);

    loop {
        let (us_cm, ir_cm) = sample(&mut source, shares).await;
        debug!("Distance - US: {} cm, IR: {} cm", us_cm, ir_cm);

        ticker.next().await;
    }
}

/// Firmware sensor scan task
#[cfg(feature = "rp")]
#[embassy_executor::task]
pub async fn sensor_scan(sensors: crate::hw::range_sensors::RangeSensors) {
    use crate::system::config::DriveConfig;
    use crate::system::shares::SHARES;

    run(sensors, &SHARES, DriveConfig::new().sample_period).await
}
