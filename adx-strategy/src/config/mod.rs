//! Configuration module

pub mod hyperopt;
pub mod indicators;
pub mod loader;
pub mod parameters;
pub mod strategy;

pub use hyperopt::*;
pub use indicators::*;
pub use loader::*;
pub use parameters::*;
pub use strategy::*;
