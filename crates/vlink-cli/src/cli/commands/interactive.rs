//! Interactive mode: banner and prompts on stderr, replies from stdin.

use super::RULE;
use anyhow::{Context, Result};
use std::io::{self, Write};
use vlink_core::input::prompt_request;
use vlink_core::link::{LinkDefaults, LinkRequest};

pub fn run_interactive(defaults: &LinkDefaults) -> Result<LinkRequest> {
    let mut err = io::stderr().lock();
    writeln!(err, "{RULE}")?;
    writeln!(err, "vlink: VLESS share link generator")?;
    writeln!(err, "{RULE}")?;
    writeln!(err)?;
    writeln!(err, "Enter connection details:")?;

    let req = prompt_request(io::stdin().lock(), &mut err, defaults)
        .context("reading connection details")?;
    Ok(req)
}
