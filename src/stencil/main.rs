//! The `stencil` binary. All CLI logic lives in `cli/`; this file only runs it and
//! turns a failure into a message on stderr and exit status 1.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", format!("❌ Error: {:#}", e).red());
        std::process::exit(1);
    }
}
