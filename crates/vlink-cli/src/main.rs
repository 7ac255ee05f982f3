use vlink_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    if let Err(err) = Cli::run_from_args() {
        eprintln!("vlink error: {:#}", err);
        std::process::exit(1);
    }
}
