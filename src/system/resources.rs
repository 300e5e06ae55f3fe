//! Hardware Resource Management
//!
//! Assigns the RP2350 pins and peripherals to the components that own them.
//! Every resource has exactly one owner; nothing here is shared between
//! tasks.
//!
//! # Resource Groups
//! - Range sensors: HC-SR04 trigger/echo pins, ADC and the infrared input
//! - Motor driver: TB6612FNG standby pin, direction pins and PWM channels

use assign_resources::assign_resources;
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;
use embassy_rp::Peripherals;

assign_resources! {
    /// Ultrasonic and infrared distance sensors
    range_sensors: RangeSensorResources {
        trigger_pin: PIN_15,
        echo_pin: PIN_14,
        adc: ADC,
        ir_pin: PIN_26, // ADC0
    },
    /// TB6612FNG dual motor driver pins and PWM channels
    motor_driver: MotorDriverResources {
        standby_pin: PIN_22,
        // Motor 1, the turning motor
        m1_slice: PWM_SLICE6,
        m1_pwm_pin: PIN_28,
        m1_in1_pin: PIN_21,
        m1_in2_pin: PIN_20,
        // Motor 2, fixed direction
        m2_slice: PWM_SLICE5,
        m2_pwm_pin: PIN_27,
        m2_in1_pin: PIN_19,
        m2_in2_pin: PIN_18,
    },
}

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Splits the peripherals into the resource groups above
pub fn split(p: Peripherals) -> AssignedResources {
    split_resources!(p)
}
