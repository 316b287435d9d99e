//! Utility modules: build info, logging, user file locations.

pub mod build_info;
pub mod logging;
pub mod persistence;
