//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit the CHO curve by damped Gauss-Newton iteration (`levenberg`)
//! - fit the fat curve in closed form (`quadratic`)
//! - score any fitted curve against the data (`quality`)
//! - dispatch a model kind to its fitter and assemble the result (`fitter`)

pub mod fitter;
pub mod levenberg;
pub mod quadratic;
pub mod quality;

pub use fitter::*;
pub use levenberg::*;
pub use quadratic::*;
pub use quality::*;
