/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic data module
//!
//! Electron configurations for the supported elements and the
//! read-only database that maps an element symbol to its configuration.

mod configuration;
pub mod database;
pub mod errors;

pub use configuration::{AtomConfiguration, OrbitalSpec, ShellType};
pub use database::{lookup, supported_symbols};
pub use errors::{AtomError, Result};
