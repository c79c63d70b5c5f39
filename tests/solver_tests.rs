/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Properties of the individual radial solvers on realistic inputs

use approx::assert_relative_eq;
use ksdft_rs::potential::{
    assemble_effective_potential, evaluate_xc, solve_hartree, GridSettings, HartreeSettings,
    RadialGrid, SchrodingerSettings, SchrodingerSolver, DEFAULT_DENSITY_CUTOFF,
};
use rstest::rstest;
use std::f64::consts::PI;

fn default_grid() -> RadialGrid {
    RadialGrid::new(&GridSettings::default()).unwrap()
}

#[test]
fn test_hartree_of_hydrogen_density() {
    let grid = default_grid();
    let density: Vec<f64> = grid.r().iter().map(|&r| (-2.0 * r).exp() / PI).collect();
    let solution = solve_hartree(&grid, &density, 1.0, &HartreeSettings::default()).unwrap();
    assert!(solution.converged);

    // U(r) = 1 - (1 + r) e^{-2r}
    for (i, &r) in grid.r().iter().enumerate().step_by(997) {
        let exact = 1.0 - (1.0 + r) * (-2.0 * r).exp();
        assert_relative_eq!(solution.potential[i], exact, epsilon = 1e-6);
    }
}

#[rstest]
#[case(1.0)]
#[case(4.0)]
#[case(11.0)]
fn test_hartree_boundary_conditions(#[case] z: f64) {
    let grid = RadialGrid::logarithmic(1e-12, 30.0, 6000).unwrap();
    let density = grid.trial_density(z, z).unwrap();
    let solution = solve_hartree(&grid, &density, z, &HartreeSettings::default()).unwrap();

    assert!(solution.converged);
    assert_relative_eq!(solution.potential[grid.len() - 1], z, max_relative = 1e-12);
    assert!(solution.potential[0].abs() < 1e-6 * z);
}

#[test]
fn test_effective_potential_is_pure() {
    let grid = RadialGrid::logarithmic(1e-12, 30.0, 6000).unwrap();
    let density = grid.trial_density(3.0, 3.0).unwrap();
    let hartree = solve_hartree(&grid, &density, 3.0, &HartreeSettings::default()).unwrap();
    let xc = evaluate_xc(&density, DEFAULT_DENSITY_CUTOFF);

    let first = assemble_effective_potential(&grid, 3.0, &hartree.potential, &xc).unwrap();
    let second = assemble_effective_potential(&grid, 3.0, &hartree.potential, &xc).unwrap();
    assert_eq!(first, second);

    // Nuclear attraction dominates at the origin
    assert!(first[0] < -1e11);
}

#[test]
fn test_xc_cutoff_in_density_tail() {
    let grid = default_grid();
    let density = grid.trial_density(20.0, 20.0).unwrap();
    let xc = evaluate_xc(&density, DEFAULT_DENSITY_CUTOFF);

    for (i, &n) in density.iter().enumerate() {
        if n <= DEFAULT_DENSITY_CUTOFF {
            assert_eq!(xc.potential(i), 0.0);
            assert_eq!(xc.energy_density(i), 0.0);
        } else {
            assert!(xc.potential(i) < 0.0);
        }
    }
    // e^{-20 r} falls below the cutoff well inside r_max
    assert_eq!(xc.potential(grid.len() - 1), 0.0);
}

#[rstest]
#[case(1, 0)]
#[case(2, 0)]
#[case(2, 1)]
#[case(3, 1)]
fn test_node_count_law(#[case] n: u32, #[case] l: u32) {
    // Screened potential with levels of every (n, l) listed
    let grid = RadialGrid::logarithmic(1e-12, 60.0, 12000).unwrap();
    let potential: Vec<f64> = grid
        .r()
        .iter()
        .map(|&r| -(1.0 + 2.0 * (-r).exp()) / r)
        .collect();
    let settings = SchrodingerSettings {
        energy_start: -20.0,
        energy_step: 0.01,
        ..SchrodingerSettings::default()
    };

    let solution = SchrodingerSolver::new(&grid, &potential, &settings)
        .unwrap()
        .solve(n, l)
        .unwrap();
    assert!(solution.converged, "({}, {}) did not converge", n, l);
    assert_eq!(solution.nodes, (n - l - 1) as usize);
    assert!(solution.energy < 0.0);

    let norm = grid
        .integrate_with(|i, _| solution.wavefunction[i].powi(2))
        .unwrap();
    assert_relative_eq!(norm, 1.0, epsilon = 1e-9);
}

#[test]
fn test_guard_bands_do_not_change_levels() {
    let grid = RadialGrid::logarithmic(1e-12, 40.0, 8000).unwrap();
    let potential: Vec<f64> = grid.r().iter().map(|&r| -2.0 / r).collect();

    let energies: Vec<f64> = [(6, 5), (3, 2), (12, 10)]
        .iter()
        .map(|&(inner_guard, outer_guard)| {
            let settings = SchrodingerSettings {
                energy_start: -5.03,
                inner_guard,
                outer_guard,
                ..SchrodingerSettings::default()
            };
            let solution = SchrodingerSolver::new(&grid, &potential, &settings)
                .unwrap()
                .solve(2, 0)
                .unwrap();
            assert!(solution.converged);
            solution.energy
        })
        .collect();

    // He+ 2s lies at -Z²/8
    assert_relative_eq!(energies[0], -0.5, epsilon = 1e-5);
    assert_relative_eq!(energies[1], energies[0], epsilon = 1e-9);
    assert_relative_eq!(energies[2], energies[0], epsilon = 1e-9);
}
