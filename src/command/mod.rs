//! Command selection and payload construction.
//!
//! This module provides:
//! - The run mode parsed from the command line ([`Mode`])
//! - Validation gates and action selection ([`route`], [`Action`])
//! - Strategy profiles and the set-parameter envelope ([`StrategyProfile`],
//!   [`CommandEnvelope`], [`build`])

mod mode;
pub mod payload;
mod router;


pub use mode::Mode;
pub use payload::{CommandEnvelope, StrategyProfile, build};
pub use router::{Action, route};
