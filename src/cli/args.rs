use crate::output::OutputFormat;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory to print as a tree
    pub folder: Option<PathBuf>,

    /// Write the tree to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Get the output format based on flags.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tree
        }
    }

    /// Print the usage text to standard output.
    pub fn print_usage() {
        // print_help only fails on a broken stdout, in which case there is
        // nothing useful left to report.
        let _ = Self::command().print_help();
    }
}
