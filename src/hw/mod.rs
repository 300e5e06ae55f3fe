//! RP2350 bindings for the distance sensors and the motor driver
pub mod drive_motors;
pub mod range_sensors;
