pub mod args;

use crate::core::walker;
use crate::error::Result;
use crate::output::router::{self, Destination, RouteOutcome};
use crate::output::{OutputFormat, formatter, json};
use log::{debug, warn};
use std::io::IsTerminal;

pub struct Cli {
    args: args::Args,
}

impl Cli {
    pub fn new() -> Self {
        Cli {
            args: args::Args::parse(),
        }
    }

    pub fn with_args(args: args::Args) -> Self {
        Cli { args }
    }

    pub fn args(&self) -> &args::Args {
        &self.args
    }

    pub fn run(&self) -> Result<()> {
        let Some(folder) = &self.args.folder else {
            args::Args::print_usage();
            return Ok(());
        };

        debug!("Building tree for: {}", folder.display());
        let tree = walker::walk(folder)?;

        let text = match self.args.output_format() {
            OutputFormat::Tree => formatter::render(&tree),
            OutputFormat::Json => json::to_string(&tree)?,
        };

        let destination = self.destination();
        debug!("Routing output to {:?}", destination);

        match router::route(&text, &destination)? {
            RouteOutcome::Printed => {}
            RouteOutcome::Written(path) => {
                debug!("Wrote tree to {}", path.display());
            }
            RouteOutcome::Skipped => {
                warn!(
                    "standard output is not a terminal and no --output file was given; nothing was written"
                );
            }
        }

        Ok(())
    }

    fn destination(&self) -> Destination {
        if let Some(path) = &self.args.output {
            Destination::File(path.clone())
        } else if std::io::stdout().is_terminal() {
            Destination::Terminal
        } else {
            Destination::Unknown
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
