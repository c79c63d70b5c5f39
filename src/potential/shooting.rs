/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Root searches over a shooting parameter
//!
//! Both radial solvers integrate inward from the outer boundary and then
//! adjust one scalar until the value at the origin vanishes. The searches
//! here are generic over the integration so that each solver only supplies a
//! closure mapping the parameter to the residual at the origin.

use serde::{Deserialize, Serialize};

/// Settings for the secant-style Newton search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSettings {
    /// Initial finite-difference perturbation of the parameter
    pub step: f64,
    /// Convergence threshold on |residual|
    pub tolerance: f64,
    pub max_iterations: usize,
}

/// Result of a Newton search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonOutcome {
    /// Last parameter at which the residual was evaluated
    pub parameter: f64,
    /// Residual at `parameter`
    pub residual: f64,
    /// Perturbation in use when the search stopped
    pub step: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Drive `residual_at(parameter)` to zero with finite-difference Newton steps
///
/// Every iteration evaluates the residual at the current parameter and at the
/// parameter shifted by the perturbation, then takes a Newton step along the
/// finite-difference slope. The perturbation halves whenever the residual
/// changes sign between iterations. The search stops without converging
/// when the slope vanishes or is not finite.
pub fn newton_shoot<F, E>(
    mut residual_at: F,
    start: f64,
    settings: &NewtonSettings,
) -> Result<NewtonOutcome, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let mut parameter = start;
    let mut step = settings.step;
    let mut previous_residual = 0.0;
    let mut last = (start, f64::NAN);
    let mut iterations = 0;

    while iterations < settings.max_iterations {
        let residual = residual_at(parameter)?;
        last = (parameter, residual);

        if residual.abs() < settings.tolerance {
            return Ok(NewtonOutcome {
                parameter,
                residual,
                step,
                iterations,
                converged: true,
            });
        }

        let slope = (residual_at(parameter + step)? - residual) / step;
        if slope == 0.0 || !slope.is_finite() {
            break;
        }

        parameter -= residual / slope;
        if opposite_signs(previous_residual, residual) {
            step *= 0.5;
        }
        previous_residual = residual;
        iterations += 1;
    }

    Ok(NewtonOutcome {
        parameter: last.0,
        residual: last.1,
        step,
        iterations,
        converged: false,
    })
}

/// Settings for the node-constrained energy scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionSettings {
    /// Initial energy increment
    pub initial_step: f64,
    /// Convergence threshold on |residual|
    pub tolerance: f64,
    /// Increment below which the energy is considered resolved
    pub step_tolerance: f64,
    pub max_iterations: usize,
    /// The scan stops once the energy reaches this bound
    pub upper_bound: f64,
}

/// One trial integration at a fixed energy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingTrial {
    /// Value of the solution at the origin
    pub residual: f64,
    /// Sign changes counted in the interior of the grid
    pub nodes: usize,
}

/// Result of a node-constrained energy scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionOutcome {
    /// Last energy at which a trial was integrated
    pub energy: f64,
    pub residual: f64,
    pub nodes: usize,
    pub step: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Scan the energy upward and bisect onto the eigenvalue with `target_nodes` nodes
///
/// The energy rises by the current increment until the residual changes sign
/// while the trial below already had the target node count. From then on the
/// eigenvalue is bracketed: the increment halves and the energy moves back
/// into the bracket. The scan succeeds once a trial with the target node count
/// has a residual below tolerance, or once the increment can no longer move
/// the energy. In the second case the lower end of the bracket is returned,
/// because trials above the eigenvalue carry one node too many.
pub fn node_bisection<F, E>(
    mut trial_at: F,
    start: f64,
    target_nodes: usize,
    settings: &BisectionSettings,
) -> Result<BisectionOutcome, E>
where
    F: FnMut(f64) -> Result<ShootingTrial, E>,
{
    let mut energy = start;
    let mut step = settings.initial_step;
    // Last trial below the sign change
    let mut lower: Option<(f64, ShootingTrial)> = None;
    let mut bracketed = false;
    let mut last: Option<(f64, ShootingTrial)> = None;
    let mut iterations = 0;

    while iterations < settings.max_iterations && energy < settings.upper_bound {
        let trial = trial_at(energy)?;
        last = Some((energy, trial));

        let exhausted = step < settings.step_tolerance || energy + step == energy;
        if trial.nodes == target_nodes && (trial.residual.abs() < settings.tolerance || exhausted) {
            return Ok(BisectionOutcome::finish(energy, trial, step, iterations, true));
        }

        match lower {
            Some((lower_energy, lower_trial))
                if bracketed && exhausted && lower_trial.nodes == target_nodes =>
            {
                return Ok(BisectionOutcome::finish(
                    lower_energy,
                    lower_trial,
                    step,
                    iterations,
                    true,
                ));
            }
            Some((lower_energy, lower_trial))
                if lower_trial.nodes == target_nodes
                    && opposite_signs(lower_trial.residual, trial.residual) =>
            {
                bracketed = true;
                step *= 0.5;
                energy = lower_energy + step;
            }
            _ => {
                lower = Some((energy, trial));
                energy += step;
            }
        }
        iterations += 1;
    }

    let (energy, trial) = last.unwrap_or((
        start,
        ShootingTrial {
            residual: f64::NAN,
            nodes: 0,
        },
    ));

    Ok(BisectionOutcome::finish(energy, trial, step, iterations, false))
}

impl BisectionOutcome {
    fn finish(
        energy: f64,
        trial: ShootingTrial,
        step: f64,
        iterations: usize,
        converged: bool,
    ) -> Self {
        Self {
            energy,
            residual: trial.residual,
            nodes: trial.nodes,
            step,
            iterations,
            converged,
        }
    }
}

/// Strict sign change; zeros and NaN never count
fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}
