//! Input acquisition: positional arguments or interactive prompts.
//!
//! Exactly five positional arguments select non-interactive mode; any other
//! count falls back to prompting for every field.

mod prompt;

pub use prompt::prompt_request;

use crate::link::{LinkDefaults, LinkRequest};
use thiserror::Error;

/// Number of positional arguments that selects non-interactive mode.
pub const POSITIONAL_ARITY: usize = 5;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended before {field} was entered")]
    UnexpectedEof { field: &'static str },
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// How the link parameters will be obtained for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// identifier, server, port, public key, short ID taken from the command line.
    Positional(LinkRequest),
    /// Fields will be prompted for one by one.
    Interactive,
}

impl Invocation {
    /// Select the mode from the positional arguments (program name excluded).
    /// SNI and remark come from `defaults` in positional mode.
    pub fn from_args(args: &[String], defaults: &LinkDefaults) -> Self {
        match args {
            [identifier, server, port, public_key, short_id] => {
                Invocation::Positional(LinkRequest::from_parts(
                    identifier.as_str(),
                    server.as_str(),
                    port,
                    public_key.as_str(),
                    short_id.as_str(),
                    defaults.sni.as_str(),
                    defaults.remark.as_str(),
                ))
            }
            _ => Invocation::Interactive,
        }
    }
}
