//! Domain Entities

pub mod customer;
pub mod feedback;
pub mod message;
pub mod profile;
pub mod ticket;
