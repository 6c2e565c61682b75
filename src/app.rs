// src/app.rs
use anyhow::{Context, Result};
use version_stamper_infra::LocalFileSystem;
use version_stamper_ports::filesystem::StampPlan;
use version_stamper_usecase::{StampOutcome, StampVersion};

use crate::cli::Args;

pub fn run(args: Args) -> Result<StampOutcome> {
    run_with_plan(&StampPlan::from(args))
}

pub fn run_with_plan(plan: &StampPlan) -> Result<StampOutcome> {
    let fs = LocalFileSystem;
    StampVersion::new(&fs, &fs)
        .run(plan)
        .with_context(|| format!("could not stamp {}", plan.output.display()))
}
