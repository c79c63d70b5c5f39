/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for ksdft-rs

use anyhow::Context;
use clap::Parser;
use ksdft_rs::atoms::{lookup, supported_symbols};
use ksdft_rs::cli::Args;
use ksdft_rs::output::{log_report, write_results, RunSummary};
use ksdft_rs::ScfDriver;
use log::{error, info, warn};

fn main() -> anyhow::Result<()> {
    // Initialize logging, info unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        println!("{}", supported_symbols().join(" "));
        return Ok(());
    }

    let symbol = args.atom.as_deref().context("no atom given")?;
    let atom = lookup(symbol).with_context(|| {
        format!(
            "unsupported atom '{}'; choose one of: {}",
            symbol,
            supported_symbols().join(" ")
        )
    })?;
    let config = args
        .solver_config()
        .context("invalid solver configuration")?;

    info!("ksdft-rs v{}", ksdft_rs::VERSION);
    let result = ScfDriver::new(&atom, &config)?.run()?;
    log_report(&result);

    if result.converged() {
        if !args.no_files {
            write_results(&result, &args.output_dir);
        }
    } else {
        warn!("Skipping wavefunction output for a non-converged run");
    }

    if let Some(path) = &args.summary {
        match RunSummary::from_result(&result).write_json(path) {
            Ok(()) => info!("Wrote summary to {}", path.display()),
            Err(err) => error!("Could not write summary to {}: {}", path.display(), err),
        }
    }

    Ok(())
}
