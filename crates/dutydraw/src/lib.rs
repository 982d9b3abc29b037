//! DutyDraw library: application logic behind the `dutydraw` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
