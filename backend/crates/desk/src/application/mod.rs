//! Application Layer

pub mod config;
pub mod profile;
pub mod reply;
pub mod transition;
