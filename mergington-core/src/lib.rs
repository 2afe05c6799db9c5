//! Core types for the Mergington extracurricular activity directory.
//!
//! Defines the activity record, the name-keyed directory with its
//! enroll/withdraw rules, and the seed catalogue the service starts with.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod directory;
pub mod error;
pub mod seed;

pub use activity::Activity;
pub use directory::ActivityDirectory;
pub use error::DirectoryError;
