//! Command line layer: argument parsing (`args`), CLI errors (`errors`) and
//! the run orchestration (`runner`). The library does the actual work.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
