//! Built-in checks for the knob subsystem

pub mod build_info;
pub mod config;
pub mod scale;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use scale::ScaleCheck;
