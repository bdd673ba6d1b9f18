pub mod config;
pub mod logging;

pub mod attempt;
pub mod fetch;
pub mod result;

pub use attempt::{record_attempt, InputError};
pub use result::{is_html_content_type, Outcome, ResolutionResult};
