/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Kohn-Sham effective potential

use super::errors::{check_len, Result};
use super::exchange_correlation::XcFields;
use super::grid::RadialGrid;

/// Potentials from one SCF iteration
#[derive(Debug, Clone, Default)]
pub struct PotentialFields {
    /// Hartree potential as U(r) = r V_H(r)
    pub hartree: Vec<f64>,
    pub hartree_converged: bool,
    pub xc: XcFields,
    /// V_eff(r) = -Z/r + U/r + Vx + Vc
    pub effective: Vec<f64>,
}

/// Assemble `V_eff(r) = -Z/r + U(r)/r + Vx(r) + Vc(r)`
pub fn assemble_effective_potential(
    grid: &RadialGrid,
    nuclear_charge: f64,
    hartree: &[f64],
    xc: &XcFields,
) -> Result<Vec<f64>> {
    let n = grid.len();
    check_len("Hartree potential", hartree, n)?;
    check_len("exchange potential", &xc.v_exchange, n)?;
    check_len("correlation potential", &xc.v_correlation, n)?;

    Ok(grid
        .r()
        .iter()
        .enumerate()
        .map(|(i, &r)| (hartree[i] - nuclear_charge) / r + xc.potential(i))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::exchange_correlation::evaluate_xc;
    use approx::assert_relative_eq;

    #[test]
    fn test_bare_nucleus() {
        let grid = RadialGrid::logarithmic(1e-6, 30.0, 200).unwrap();
        let zeros = vec![0.0; grid.len()];
        let xc = evaluate_xc(&zeros, 1e-20);

        let potential = assemble_effective_potential(&grid, 3.0, &zeros, &xc).unwrap();
        for (v, r) in potential.iter().zip(grid.r()) {
            assert_relative_eq!(*v, -3.0 / r, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_screened_tail() {
        // A fully screening Hartree term cancels the nucleus far out
        let grid = RadialGrid::logarithmic(1e-6, 30.0, 200).unwrap();
        let hartree = vec![2.0; grid.len()];
        let zeros = vec![0.0; grid.len()];
        let xc = evaluate_xc(&zeros, 1e-20);

        let potential = assemble_effective_potential(&grid, 2.0, &hartree, &xc).unwrap();
        assert!(potential.iter().all(|v| v.abs() < 1e-15));

        assert!(assemble_effective_potential(&grid, 2.0, &hartree[1..], &xc).is_err());
    }
}
