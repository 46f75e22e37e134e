//! Employee domain model
//!
//! This crate models permanent and contract employees behind a shared
//! interface, with validated fields, optional paid and casual leave
//! capabilities, manager approval of subordinate leave, and a scripted
//! console demonstration that exercises all of it.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod demo;
pub mod error;
pub mod leave;
pub mod models;
