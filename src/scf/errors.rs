/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the self-consistent field cycle

use thiserror::Error;

/// Result type for SCF operations
pub type Result<T> = std::result::Result<T, ScfError>;

/// Error type for SCF operations
#[derive(Error, Debug)]
pub enum ScfError {
    /// Solver configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for the solver settings
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagation of error from atoms module
    #[error("Atom error: {0}")]
    AtomError(#[from] crate::atoms::AtomError),

    /// Propagation of error from potential module
    #[error("Potential error: {0}")]
    PotentialError(#[from] crate::potential::PotentialError),
}
