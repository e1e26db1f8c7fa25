//! Output formatting for CLI commands.

pub mod diagnostic;
pub mod report;
pub mod table;
