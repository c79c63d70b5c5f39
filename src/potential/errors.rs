/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for potential calculations

use thiserror::Error;

/// Result type for potential calculations
pub type Result<T> = std::result::Result<T, PotentialError>;

/// Error type for potential-related operations
#[derive(Error, Debug)]
pub enum PotentialError {
    /// Invalid radial grid parameters
    #[error("Invalid radial grid: {0}")]
    InvalidGrid(String),

    /// Invalid numerical settings
    #[error("Invalid solver settings: {0}")]
    InvalidSettings(String),

    /// Array length does not match the grid
    #[error("Length mismatch for {name}: expected {expected}, got {found}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// Invalid quantum numbers for a radial solve
    #[error("Invalid quantum numbers: n={n}, l={l}")]
    InvalidQuantumNumbers { n: u32, l: u32 },

    /// A function could not be normalized
    #[error("Normalization failed: {0}")]
    Normalization(String),

    /// Failed to calculate potential
    #[error("Potential calculation failed: {0}")]
    CalculationError(String),

    /// Propagation of error from utils module
    #[error("Utils error: {0}")]
    UtilsError(#[from] crate::utils::errors::UtilsError),
}

/// Check that `values` has `expected` entries
pub(crate) fn check_len(name: &'static str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(PotentialError::LengthMismatch {
            name,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
