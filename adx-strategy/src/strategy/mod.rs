//! Strategy engine module
//!
//! Strategy definition, signal rules, validation and the ADX implementation.

pub mod base;
pub mod implementations;
pub mod rules;
pub mod signal;
pub mod validator;

pub use base::*;
pub use implementations::*;
pub use rules::*;
pub use signal::*;
pub use validator::*;
