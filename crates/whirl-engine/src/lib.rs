//! Whirl engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the application:
//! window/event loop, device and surface management, frame timing, matrix
//! math, and the indexed mesh renderer.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod math;
pub mod render;
