//! Range Sensors
//!
//! [`DistanceSource`] backed by an HC-SR04 ultrasonic sensor and a Sharp
//! analog infrared sensor.
//!
//! # Error Handling
//! - Missing echo within [`ECHO_TIMEOUT`]: 0 cm
//! - ADC conversion error: 0 cm
//!
//! Both are ordinary readings to the decision engine.

use embassy_rp::adc::{self, Adc, Async, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{with_timeout, Duration, Instant, Timer};

use crate::system::io::DistanceSource;
use crate::system::range::{echo_to_cm, ir_counts_to_cm, ECHO_TIMEOUT};
use crate::system::resources::{Irqs, RangeSensorResources};

/// Ultrasonic trigger and echo pins plus the infrared ADC channel
pub struct RangeSensors {
    trigger: Output<'static>,
    echo: Input<'static>,
    adc: Adc<'static, Async>,
    ir_channel: Channel<'static>,
}

impl RangeSensors {
    pub fn new(r: RangeSensorResources) -> Self {
        let trigger = Output::new(r.trigger_pin, Level::Low);
        let echo = Input::new(r.echo_pin, Pull::None);
        let adc = Adc::new(r.adc, Irqs, adc::Config::default());
        let ir_channel = Channel::new_pin(r.ir_pin, Pull::None);
        Self {
            trigger,
            echo,
            adc,
            ir_channel,
        }
    }

    /// Fires the trigger and times the echo pulse
    ///
    /// # Returns
    /// * `Some(pulse)` - width of the echo pulse
    /// * `None` - no complete echo within [`ECHO_TIMEOUT`]
    async fn measure_echo(&mut self) -> Option<Duration> {
        self.trigger.set_low();
        Timer::after_micros(2).await;
        self.trigger.set_high();
        Timer::after_micros(10).await;
        self.trigger.set_low();

        let echo = &mut self.echo;
        with_timeout(ECHO_TIMEOUT, async {
            echo.wait_for_high().await;
            let start = Instant::now();
            echo.wait_for_low().await;
            Instant::now() - start
        })
        .await
        .ok()
    }
}

impl DistanceSource for RangeSensors {
    async fn read_ultrasonic_cm(&mut self) -> f32 {
        let echo = self.measure_echo().await;
        if echo.is_none() {
            debug!("Ultrasonic echo timed out");
        }
        echo_to_cm(echo)
    }

    async fn read_infrared_cm(&mut self) -> f32 {
        match self.adc.read(&mut self.ir_channel).await {
            Ok(raw) => ir_counts_to_cm(raw),
            Err(_) => {
                warn!("Infrared ADC read failed");
                0.0
            }
        }
    }
}
