//! # Contractr Common
//!
//! Types shared by every `contractr` crate.
//!
//! * [`contract`]: the contract parameters (parties, phases) and their loader.
//! * [`config`]: runtime options collected from the command line.
//! * [`money`]: display helper for amounts in the contract currency.
//! * [`error`]: errors raised while loading or validating contract parameters.

pub mod config;
pub mod contract;
pub mod error;
pub mod money;

mod macros;
