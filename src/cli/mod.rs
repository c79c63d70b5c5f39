/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Argument parsing for the `ksdft-rs` executable. Command-line overrides are
//! applied on top of an optional JSON configuration file.

use crate::scf::{Result, SolverConfig};
use clap::Parser;
use std::path::PathBuf;

/// Self-consistent Kohn-Sham LDA solver for neutral atoms H through Ca
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Element symbol of the atom to solve, e.g. "He"
    #[arg(required_unless_present = "list")]
    pub atom: Option<String>,

    /// JSON file with solver settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for wavefunction and potential files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Override maximum SCF iterations
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Override total-energy convergence threshold (Hartree)
    #[arg(long)]
    pub energy_tolerance: Option<f64>,

    /// Override the weight of the new density in linear mixing
    #[arg(long)]
    pub mixing: Option<f64>,

    /// Override the number of radial grid intervals
    #[arg(long)]
    pub intervals: Option<usize>,

    /// Solve orbitals one after another instead of in parallel
    #[arg(long)]
    pub serial: bool,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Skip writing wavefunction and potential files
    #[arg(long)]
    pub no_files: bool,

    /// List supported atoms and exit
    #[arg(long)]
    pub list: bool,
}

impl Args {
    /// Build the solver configuration from the file (if any) and overrides
    pub fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)?,
            None => SolverConfig::default(),
        };

        if let Some(max_iterations) = self.max_iterations {
            config.scf.max_iterations = max_iterations;
        }
        if let Some(tolerance) = self.energy_tolerance {
            config.scf.energy_tolerance = tolerance;
        }
        if let Some(mixing) = self.mixing {
            config.scf.mixing = mixing;
        }
        if let Some(intervals) = self.intervals {
            config.grid.intervals = intervals;
        }
        if self.serial {
            config.scf.parallel_orbitals = false;
        }

        config.validate()?;
        Ok(config)
    }
}
