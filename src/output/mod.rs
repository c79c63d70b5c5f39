/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Result writers and the final report
//!
//! Wavefunctions and the Hartree potential are written as two-column text,
//! one `"{x:e} {y:e}"` pair per line with no header. A JSON summary of the
//! run can be written alongside.

use crate::scf::{EnergyComponents, ScfResult, ScfStatus};
use crate::utils::hartree_to_ev;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for output operations
pub type Result<T> = std::result::Result<T, OutputError>;

/// Error type for writing results
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column length mismatch: {x} abscissae, {y} values")]
    LengthMismatch { x: usize, y: usize },
}

/// File name for the (n, l) wavefunction of `atom`
pub fn wavefunction_filename(atom: &str, n: u32, l: u32) -> String {
    format!("{}_n_{}_l_{}.dat", atom, n, l)
}

/// File name for the Hartree potential of `atom`
pub fn hartree_filename(atom: &str) -> String {
    format!("{}_U_Hartree.dat", atom)
}

/// Write paired columns to `path`
pub fn write_xy<P: AsRef<Path>>(path: P, x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(OutputError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for (xi, yi) in x.iter().zip(y) {
        writeln!(writer, "{:e} {:e}", xi, yi)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write every orbital and the Hartree potential into `dir`
///
/// A failed write is logged and skipped; the paths that were written are
/// returned.
pub fn write_results<P: AsRef<Path>>(result: &ScfResult, dir: P) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    let r = result.grid.r();
    let symbol = &result.atom.symbol;

    let mut jobs: Vec<(PathBuf, &[f64])> = result
        .orbitals
        .iter()
        .filter(|o| o.has_wavefunction())
        .map(|o| {
            (
                dir.join(wavefunction_filename(symbol, o.n, o.l)),
                o.wavefunction.as_slice(),
            )
        })
        .collect();
    jobs.push((
        dir.join(hartree_filename(symbol)),
        result.fields.hartree.as_slice(),
    ));

    let mut written = Vec::with_capacity(jobs.len());
    for (path, values) in jobs {
        match write_xy(&path, r, values) {
            Ok(()) => {
                info!("Wrote {}", path.display());
                written.push(path);
            }
            Err(err) => error!("Could not write {}: {}", path.display(), err),
        }
    }
    written
}

/// One orbital in the run summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalSummary {
    pub label: String,
    pub n: u32,
    pub l: u32,
    pub occupancy: f64,
    /// Eigenvalue in Hartree
    pub energy: f64,
    pub converged: bool,
}

/// Serializable digest of an SCF run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub atom: String,
    pub atomic_number: u32,
    pub status: ScfStatus,
    pub energies: EnergyComponents,
    pub orbitals: Vec<OrbitalSummary>,
    pub energy_history: Vec<f64>,
}

impl RunSummary {
    pub fn from_result(result: &ScfResult) -> Self {
        Self {
            atom: result.atom.symbol.clone(),
            atomic_number: result.atom.atomic_number,
            status: result.status,
            energies: result.energies,
            orbitals: result
                .orbitals
                .iter()
                .map(|o| OrbitalSummary {
                    label: o.label(),
                    n: o.n,
                    l: o.l,
                    occupancy: o.occupancy,
                    energy: o.energy,
                    converged: o.converged,
                })
                .collect(),
            energy_history: result.history.as_slice().to_vec(),
        }
    }

    /// Write the summary as pretty-printed JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Log the orbital table and energy components
pub fn log_report(result: &ScfResult) {
    let state = match result.status {
        ScfStatus::Converged { iterations } => format!("converged in {} iterations", iterations),
        ScfStatus::NotConverged { iterations } => {
            format!("NOT converged after {} iterations", iterations)
        }
    };
    info!("Final state of {}: {}", result.atom.symbol, state);

    info!(
        "  {:<5} {:>9} {:>16} {:>14}  converged",
        "orb", "occupancy", "E (Ha)", "E (eV)"
    );
    for orbital in &result.orbitals {
        info!(
            "  {:<5} {:>9.3} {:>16.8} {:>14.5}  {}",
            orbital.label(),
            orbital.occupancy,
            orbital.energy,
            hartree_to_ev(orbital.energy),
            orbital.converged
        );
    }

    let energies = &result.energies;
    info!("  Band energy            {:>16.8} Ha", energies.band);
    info!("  Hartree energy         {:>16.8} Ha", energies.hartree);
    info!("  XC energy              {:>16.8} Ha", energies.exchange_correlation);
    info!("  XC double counting     {:>16.8} Ha", energies.xc_double_counting);
    info!(
        "  Total energy           {:>16.8} Ha ({:.5} eV)",
        energies.total,
        hartree_to_ev(energies.total)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_filenames() {
        assert_eq!(wavefunction_filename("He", 1, 0), "He_n_1_l_0.dat");
        assert_eq!(wavefunction_filename("Ca", 3, 1), "Ca_n_3_l_1.dat");
        assert_eq!(hartree_filename("Ne"), "Ne_U_Hartree.dat");
    }

    #[test]
    fn test_write_xy_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("series.dat");
        write_xy(&path, &[0.5, 2.0], &[1.25, -3.0e-7]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["5e-1 1.25e0", "2e0 -3e-7"]);

        let parsed: Vec<f64> = lines[1]
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(parsed, vec![2.0, -3.0e-7]);
    }

    #[test]
    fn test_write_xy_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            write_xy(dir.path().join("a.dat"), &[1.0], &[1.0, 2.0]),
            Err(OutputError::LengthMismatch { x: 1, y: 2 })
        ));
        assert!(matches!(
            write_xy(dir.path().join("missing").join("a.dat"), &[1.0], &[1.0]),
            Err(OutputError::Io(_))
        ));
    }
}
