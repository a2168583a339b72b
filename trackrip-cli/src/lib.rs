// trackrip-cli/src/lib.rs
//
// Library portion of the Trackrip CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ExtractArgs, ListArgs, StreamsArgs};
pub use commands::extract::run_extract;
pub use commands::list::run_list;
pub use commands::streams::run_streams;
