// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use version_stamper::{app, cli::Args, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match app::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
