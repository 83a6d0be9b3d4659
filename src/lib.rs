//! `choc-curves` library crate.
//!
//! The binary (`chocd`) is a thin HTTP wrapper around this library so that:
//!
//! - the fitting engine is testable without spawning a server
//! - modules are reusable (e.g., future CLI, batch tooling, notebooks)
//! - transport concerns stay out of the numeric code

pub mod api;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;
