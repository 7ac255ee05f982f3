//! CLI command handlers.

mod interactive;
mod output;

pub use interactive::run_interactive;
pub use output::write_link;

/// Separator line framing the banner and the result heading.
const RULE: &str = "==================================================";
