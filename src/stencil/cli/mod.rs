//! # CLI Layer
//!
//! One UI client for stencil. This is the only place that:
//! - Parses arguments (`setup.rs`)
//! - Sets up logging
//! - Talks to the terminal, including the article prompt
//! - Formats output for humans or scripts (`print.rs`)
//!
//! Exit codes are left to `main.rs`: every error that reaches it ends the process with
//! status 1.

mod print;
mod setup;

use anyhow::Context;
use clap::Parser;
use print::{print_messages, render_json};
use setup::{Cli, OutputFormat};
use stencil::api::Selection;
use stencil::error::StencilError;
use stencil::init::initialize;
use stencil::prompt::TerminalSelector;

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let template = cli
        .template
        .as_deref()
        .ok_or(StencilError::MissingTemplateArg)?;

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    let ctx = initialize(&root)?;
    let mode = cli.mode(ctx.config.mode());

    let selector = TerminalSelector;
    let selection = match cli.article.as_deref() {
        Some(name) => Selection::Named(name),
        None => Selection::Prompt(&selector),
    };

    let result = ctx.api.apply_template(template, selection, mode)?;

    match cli.output {
        OutputFormat::Text => print_messages(&result.messages),
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }
    Ok(())
}
