//! Mathematical utilities: the shared least-squares solver.

pub mod ols;

pub use ols::*;
