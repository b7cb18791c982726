//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;
