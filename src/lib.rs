//! Collision-avoidance car
//!
//! Control core for a two-motor car that fuses an ultrasonic and an infrared
//! distance reading into per-wheel drive commands.
//!
//! # Structure
//! - [`system`]: shared cells, configuration, the decision state machine and
//!   the motor smoothing/direction logic
//! - [`task`]: the four periodic tasks (sensor scan, decision, two motors)
//! - `hw` (feature `rp`): RP2350 sensor and motor driver bindings
//!
//! Everything outside `hw` is hardware independent and runs in host tests.

#![cfg_attr(not(test), no_std)]

mod fmt;

/// RP2350 hardware bindings
#[cfg(feature = "rp")]
pub mod hw;
/// System core modules
pub mod system;
/// Task implementations
pub mod task;
