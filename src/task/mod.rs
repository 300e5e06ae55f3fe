//! Periodic control tasks
//!
//! Each module holds the loop body of one task as a generic async function,
//! plus (with feature `rp`) the concrete `embassy_executor` task the firmware
//! spawns. Tasks only exchange data through [`Shares`](crate::system::shares::Shares).
pub mod motor_actuate;
pub mod process_sensor_data;
pub mod sensor_scan;
