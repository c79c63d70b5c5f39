/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants used in Kohn-Sham calculations (atomic units)

use std::f64::consts::PI;

/// 4π, the solid angle of a sphere
pub const FOUR_PI: f64 = 4.0 * PI;

/// Rydberg energy in eV
pub const RYDBERG: f64 = 13.6057;

/// Conversion from Hartree to eV
pub const HARTREE_TO_EV: f64 = 2.0 * RYDBERG;
