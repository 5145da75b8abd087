//! Producing a coverage percentage by running the project's test command.
//!
//! The test command is expected to write a Go-style coverage profile, which
//! is summarized with `go tool cover -func` to obtain the total.

mod command;
mod profile;
mod producer;

pub use command::{CommandOutput, CommandRunner, SystemRunner};
pub use profile::{DEFAULT_PROFILE, parse_cover_func_output};
pub use producer::CoverageProducer;
