//! CLI library components for the ad category mapper.

pub mod cli;
pub mod commands;
pub mod logging;
