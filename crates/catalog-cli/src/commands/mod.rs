//! Command implementations for the Catalog CLI.
//!
//! - [`start`] - Start the catalog development server
//!
//! Each command is implemented in its own module and provides an `execute`
//! function that takes the parsed command arguments and returns a Result.

pub mod start;

pub use start::execute as start_execute;
