/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions for Kohn-Sham calculations
//!
//! This module provides common utilities used throughout the solver.

pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{Result, UtilsError};
pub use math::{count_sign_changes, simpson_sum};

/// Convert energy from Hartree to eV
pub fn hartree_to_ev(hartree: f64) -> f64 {
    hartree * constants::HARTREE_TO_EV
}
