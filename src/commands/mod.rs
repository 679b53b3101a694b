//! Command implementations

pub mod check;
pub mod reset;
pub mod setup;
pub mod simple;
pub mod status;

pub use check::{CheckResult, check_guess};
pub use reset::reset;
pub use setup::{GameSetup, prepare};
pub use simple::run_simple;
pub use status::{GameSummary, summarize};
