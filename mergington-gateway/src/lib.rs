//! HTTP API gateway for the Mergington activity directory.
//!
//! Exposes listing, signup and unregister endpoints over a shared
//! in-memory [`ActivityDirectory`](mergington_core::ActivityDirectory),
//! plus the static signup page.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
