//! CLI command handlers. Each command is in its own file.

mod resolve;

pub use resolve::run_resolve;
