//! CLI for the vlink share link generator.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;
use vlink_core::config;
use vlink_core::input::Invocation;
use vlink_core::link::format_link;

use commands::{run_interactive, write_link};

/// Top-level CLI: positional fields or, with any other argument count, prompts.
#[derive(Debug, Parser)]
#[command(name = "vlink", version)]
#[command(about = "Generate a VLESS + REALITY share link", long_about = None)]
pub struct Cli {
    /// UUID SERVER PORT PUBLIC_KEY SHORT_ID. With any other number of
    /// arguments every field is prompted for interactively.
    #[arg(value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;

        let req = match Invocation::from_args(&cli.args, &cfg.defaults) {
            Invocation::Positional(req) => {
                tracing::debug!("positional mode");
                req
            }
            Invocation::Interactive => {
                tracing::debug!(args = cli.args.len(), "interactive mode");
                run_interactive(&cfg.defaults)?
            }
        };

        let link = format_link(&req);
        write_link(&link, &mut io::stdout().lock(), &mut io::stderr().lock())?;
        Ok(())
    }
}
