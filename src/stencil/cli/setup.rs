use clap::{Parser, ValueEnum};
use stencil::model::ApplyMode;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Replace the article with the template
    Overwrite,
    /// Add the template after the article's content
    Append,
}

impl From<ModeArg> for ApplyMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Overwrite => ApplyMode::Overwrite,
            ModeArg::Append => ApplyMode::Append,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    bin_name = "stencil",
    version,
    after_help = "Templates are read from templates/<name>.md and applied to a file in articles/."
)]
#[command(about = "Apply a markdown template to an article", long_about = None)]
pub struct Cli {
    /// Template to apply, e.g. --template=footer for templates/footer.md
    #[arg(long, value_name = "NAME")]
    pub template: Option<String>,

    /// How to write the template into the article [default: from config, else overwrite]
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Shorthand for --mode append
    #[arg(long, conflicts_with = "mode")]
    pub append: bool,

    /// Article file to update, skipping the interactive prompt
    #[arg(long, value_name = "FILE")]
    pub article: Option<String>,

    /// Directory holding templates/ and articles/ [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags win over the configured mode.
    pub fn mode(&self, configured: ApplyMode) -> ApplyMode {
        if self.append {
            return ApplyMode::Append;
        }
        self.mode.map(ApplyMode::from).unwrap_or(configured)
    }
}
