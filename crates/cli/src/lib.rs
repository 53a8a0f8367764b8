pub mod blame;
pub mod changes;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod git;
pub mod project;
pub mod removed;
pub mod report;
pub mod runner;

pub use blame::BlameMatch;
pub use changes::{ChangeSource, EMPTY_TREE};
pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use filter::FilePolicy;
pub use removed::RemovedLine;

#[cfg(test)]
pub mod test_utils;
