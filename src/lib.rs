/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # ksdft-rs
//!
//! Self-consistent Kohn-Sham density functional theory for isolated, neutral,
//! spherically symmetric atoms from hydrogen to calcium.
//!
//! The solver works on a logarithmic radial grid. The Hartree potential is
//! found from the radial Poisson equation and exchange-correlation from the
//! local density approximation (Slater exchange with VWN correlation). Each
//! occupied orbital comes from the radial Schrödinger equation by Numerov
//! shooting. The density is mixed linearly until the total energy is stable.
//!
//! ```no_run
//! use ksdft_rs::{solve_atom, SolverConfig};
//!
//! let result = solve_atom("He", &SolverConfig::default()).unwrap();
//! println!("E = {:.6} Ha", result.total_energy());
//! ```

pub mod atoms;
pub mod cli;
pub mod output;
pub mod potential;
pub mod scf;
pub mod utils;

pub use atoms::{AtomConfiguration, OrbitalSpec};
pub use scf::{ScfDriver, ScfResult, ScfStatus, SolverConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Look up `symbol` in the atom database and run the SCF cycle
pub fn solve_atom(symbol: &str, config: &SolverConfig) -> scf::Result<ScfResult> {
    let atom = atoms::lookup(symbol)?;
    ScfDriver::new(&atom, config)?.run()
}
