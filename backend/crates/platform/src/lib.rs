//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with zeroization
//! - Cookie management

pub mod cookie;
pub mod password;
