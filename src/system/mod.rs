//! Core system components for car operation
pub mod config;
pub mod decision;
pub mod drive_motor;
pub mod io;
pub mod motor;
pub mod range;
#[cfg(feature = "rp")]
pub mod resources;
pub mod shares;
pub mod state;
