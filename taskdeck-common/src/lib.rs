//! Shared infrastructure for taskdeck crates
//!
//! This crate holds the pieces every other taskdeck crate leans on: error
//! severity classification and log formatting helpers. Domain types live in
//! their own crates; nothing here knows about boards or tasks.

mod error;
mod logging;

pub use error::{ErrorSeverity, Severity};
pub use logging::Pretty;
