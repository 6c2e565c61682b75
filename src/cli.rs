// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use version_stamper_ports::filesystem::StampPlan;

use crate::VERSION;

/// Command line for `stamp`. Exactly three positional paths, no flags.
#[derive(Parser, Debug)]
#[command(
    name = "stamp",
    version = VERSION,
    about = "Substitute build provenance into a version header template",
    long_about = "Reads builder, branch, hash, date and revision from the first five lines of \
                  METADATA, replaces $BUILDER$, $BRANCH$, $HASH$, $DATE$ and $REVISION$ in \
                  TEMPLATE, and writes the result to OUTPUT. $NOW$ is left untouched."
)]
pub struct Args {
    /// Scratch file holding builder, branch, hash, date and revision, one per line
    pub metadata: PathBuf,

    /// Template text containing placeholder tokens
    pub template: PathBuf,

    /// File to create or overwrite with the stamped text
    pub output: PathBuf,
}

impl From<Args> for StampPlan {
    fn from(args: Args) -> Self {
        Self { metadata: args.metadata, template: args.template, output: args.output }
    }
}
