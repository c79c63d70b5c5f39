/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Solver configuration
//!
//! Every numerical constant of the cycle lives here with its default value.
//! Settings can be loaded from a JSON file in which any field may be omitted.

use super::errors::{Result, ScfError};
use crate::potential::{
    GridSettings, HartreeSettings, SchrodingerSettings, DEFAULT_DENSITY_CUTOFF,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings of the outer self-consistent loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScfSettings {
    pub max_iterations: usize,
    /// Convergence threshold on the change of the total energy (Hartree)
    pub energy_tolerance: f64,
    /// Weight of the newly built density in linear mixing
    pub mixing: f64,
    /// Densities at or below this value get no exchange-correlation contribution
    pub density_cutoff: f64,
    /// Solve the orbitals of one iteration in parallel
    pub parallel_orbitals: bool,
}

impl Default for ScfSettings {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            energy_tolerance: 1e-5,
            mixing: 0.5,
            density_cutoff: DEFAULT_DENSITY_CUTOFF,
            parallel_orbitals: true,
        }
    }
}

/// Complete configuration of one SCF run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub grid: GridSettings,
    pub scf: ScfSettings,
    pub hartree: HartreeSettings,
    pub schrodinger: SchrodingerSettings,
}

impl SolverConfig {
    /// Load a configuration from a JSON file, filling missing fields with defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every section for usable values
    pub fn validate(&self) -> Result<()> {
        let invalid = |err: crate::potential::PotentialError| ScfError::InvalidConfig(err.to_string());

        self.grid.validate().map_err(invalid)?;
        self.hartree.validate().map_err(invalid)?;
        self.schrodinger
            .validate_for_grid(self.grid.intervals + 1)
            .map_err(invalid)?;

        let scf = &self.scf;
        if scf.max_iterations == 0 {
            return Err(ScfError::InvalidConfig(
                "at least one SCF iteration is required".to_string(),
            ));
        }
        if !(scf.energy_tolerance.is_finite() && scf.energy_tolerance > 0.0) {
            return Err(ScfError::InvalidConfig(format!(
                "energy tolerance must be positive, got {}",
                scf.energy_tolerance
            )));
        }
        if !(scf.mixing > 0.0 && scf.mixing <= 1.0) {
            return Err(ScfError::InvalidConfig(format!(
                "mixing weight must lie in (0, 1], got {}",
                scf.mixing
            )));
        }
        if !(scf.density_cutoff.is_finite() && scf.density_cutoff >= 0.0) {
            return Err(ScfError::InvalidConfig(format!(
                "density cutoff must be non-negative, got {}",
                scf.density_cutoff
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.intervals, 20000);
        assert_eq!(config.grid.r_max, 30.0);
        assert_eq!(config.scf.max_iterations, 200);
        assert_eq!(config.scf.mixing, 0.5);
        assert_eq!(config.hartree.max_iterations, 1000);
        assert_eq!(config.schrodinger.energy_start, -150.0);
        assert_eq!(config.schrodinger.max_iterations, 5000);
    }

    #[test]
    fn test_partial_json() {
        let config =
            SolverConfig::from_json_str(r#"{"grid": {"intervals": 4000}, "scf": {"mixing": 0.3}}"#)
                .unwrap();
        assert_eq!(config.grid.intervals, 4000);
        assert_eq!(config.grid.r_min, 1e-12);
        assert_eq!(config.scf.mixing, 0.3);
        assert_eq!(config.scf.max_iterations, 200);
    }

    #[test]
    fn test_json_file_round_trip() {
        let mut config = SolverConfig::default();
        config.scf.parallel_orbitals = false;
        config.schrodinger.energy_start = -20.0;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config.to_json_string().unwrap().as_bytes())
            .unwrap();

        let loaded = SolverConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            SolverConfig::from_json_str(r#"{"grid": {"intervals": 2001}}"#),
            Err(ScfError::InvalidConfig(_))
        ));
        assert!(matches!(
            SolverConfig::from_json_str(r#"{"scf": {"mixing": 0.0}}"#),
            Err(ScfError::InvalidConfig(_))
        ));
        assert!(matches!(
            SolverConfig::from_json_str(r#"{"scf": {"max_iterations": 0}}"#),
            Err(ScfError::InvalidConfig(_))
        ));
        assert!(matches!(
            SolverConfig::from_json_str("{not json"),
            Err(ScfError::Json(_))
        ));
        assert!(matches!(
            SolverConfig::from_json_file("/nonexistent/ksdft.json"),
            Err(ScfError::Io(_))
        ));
    }
}
