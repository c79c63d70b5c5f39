/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic database for element configurations
//!
//! Maps an element symbol to its ground-state electron configuration for
//! hydrogen through calcium. Configurations follow aufbau filling, which is
//! exact in this range because 3d only starts filling after calcium.

use super::configuration::{AtomConfiguration, OrbitalSpec};
use super::errors::{AtomError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Highest atomic number in the database
pub const MAX_ATOMIC_NUMBER: u32 = 20;

/// Orbital shells in filling order, valid up to calcium
const SHELL_ORDER: [(u32, u32); 6] = [
    (1, 0), // 1s
    (2, 0), // 2s
    (2, 1), // 2p
    (3, 0), // 3s
    (3, 1), // 3p
    (4, 0), // 4s
];

static ATOM_DATABASE: Lazy<HashMap<&'static str, AtomConfiguration>> = Lazy::new(|| {
    let mut database = HashMap::new();
    for z in 1..=MAX_ATOMIC_NUMBER {
        if let (Some(symbol), Ok(config)) = (element_symbol(z), ground_state(z)) {
            database.insert(symbol, config);
        }
    }
    database
});

/// Provides element symbols for atomic numbers
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    match atomic_number {
        1 => Some("H"),
        2 => Some("He"),
        3 => Some("Li"),
        4 => Some("Be"),
        5 => Some("B"),
        6 => Some("C"),
        7 => Some("N"),
        8 => Some("O"),
        9 => Some("F"),
        10 => Some("Ne"),
        11 => Some("Na"),
        12 => Some("Mg"),
        13 => Some("Al"),
        14 => Some("Si"),
        15 => Some("P"),
        16 => Some("S"),
        17 => Some("Cl"),
        18 => Some("Ar"),
        19 => Some("K"),
        20 => Some("Ca"),
        _ => None,
    }
}

/// Ground-state orbitals for atomic number `z` by aufbau filling
fn ground_state_orbitals(z: u32) -> Vec<OrbitalSpec> {
    let mut orbitals = Vec::new();
    let mut electrons_left = z;

    for &(n, l) in &SHELL_ORDER {
        if electrons_left == 0 {
            break;
        }

        // Maximum electrons in this shell: 2(2l+1)
        let max_electrons = 2 * (2 * l + 1);
        let electrons_in_shell = electrons_left.min(max_electrons);

        orbitals.push(OrbitalSpec {
            n,
            l,
            occupancy: electrons_in_shell as f64,
        });
        electrons_left -= electrons_in_shell;
    }

    orbitals
}

fn ground_state(z: u32) -> Result<AtomConfiguration> {
    let symbol = element_symbol(z).ok_or(AtomError::InvalidAtomicNumber(z))?;
    AtomConfiguration::neutral(symbol, z, ground_state_orbitals(z))
}

/// Look up the configuration of an element by symbol
///
/// Symbols are matched exactly ("He", not "he" or "HE").
pub fn lookup(symbol: &str) -> Result<AtomConfiguration> {
    ATOM_DATABASE
        .get(symbol)
        .cloned()
        .ok_or_else(|| AtomError::UnknownAtom(symbol.to_string()))
}

/// Look up the configuration of an element by atomic number
pub fn by_atomic_number(atomic_number: u32) -> Result<AtomConfiguration> {
    let symbol = element_symbol(atomic_number).ok_or(AtomError::InvalidAtomicNumber(atomic_number))?;
    lookup(symbol)
}

/// All supported element symbols ordered by atomic number
pub fn supported_symbols() -> Vec<&'static str> {
    (1..=MAX_ATOMIC_NUMBER).filter_map(element_symbol).collect()
}
