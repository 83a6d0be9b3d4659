//! Curve evaluation for the two model kinds.

pub mod model;

pub use model::*;
