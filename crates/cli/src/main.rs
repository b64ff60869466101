mod cmd;
mod logging;

use clap::Parser;
use faktura_core::render::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "faktura", version, about = "Render invoices from plain-text templates")]
pub struct Cli {
    /// Path to the invoice template
    pub template: PathBuf,

    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format (text or json); overrides the config file
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Directory for the generated file; overrides the config file
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the rendered invoice instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

fn main() {
    let cli = Cli::parse();
    cmd::generate::run(&cli);
}
