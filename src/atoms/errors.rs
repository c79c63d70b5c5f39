/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown atom '{0}' (supported: H through Ca)")]
    UnknownAtom(String),

    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(u32),

    #[error("Invalid orbital quantum numbers: n={n}, l={l}")]
    InvalidOrbital { n: u32, l: u32 },

    #[error("Invalid occupancy {occupancy} for orbital {label} (capacity {capacity})")]
    InvalidOccupancy {
        label: String,
        occupancy: f64,
        capacity: f64,
    },

    #[error("Orbital occupancies sum to {found}, expected {expected} electrons")]
    OccupancyMismatch { expected: u32, found: f64 },

    #[error("Duplicate orbital {0} in configuration")]
    DuplicateOrbital(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
