//! Command-line walk-through of the `eng-linalg` math core.
//!
//! The binary prints the results of a fixed set of computations, grouped into [sections], and the
//! model-view-projection matrix a renderer would upload for a given point in time and camera pose.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: Overrides the log filter. By default, this crate logs at *debug* level.
//!
//! [sections]: sections::Section

use log::LevelFilter;

pub mod args;
pub mod camera;
pub mod cardioid;
pub mod sections;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `eng_demo` will log at *debug* level, unless overridden via `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
