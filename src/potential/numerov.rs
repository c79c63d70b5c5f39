/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Numerov method for linear second-order equations on a uniform mesh
//!
//! Solves `y''(x) = p(x) y(x) + s(x)` by marching from the outer boundary
//! toward the origin. Both the radial Schrödinger equation and the radial
//! Poisson equation take this form after the substitution `x = ln r`.

use super::errors::{check_len, PotentialError, Result};

/// Integrate `y'' = p y + s` inward with step `h`
///
/// The recurrence is
/// `(1 - h²p[i-1]/12) y[i-1] = 2 y[i] (1 + 5h²p[i]/12) - (1 - h²p[i+1]/12) y[i+1]
///  + h² (s[i+1] + 10 s[i] + s[i-1]) / 12`
///
/// # Arguments
///
/// * `y` - Holds the boundary values in its last two entries and is filled in place
/// * `p` - Coefficient p(x) at each grid point
/// * `source` - Optional inhomogeneous term s(x)
/// * `h` - Uniform mesh step
pub fn numerov_inward(y: &mut [f64], p: &[f64], source: Option<&[f64]>, h: f64) -> Result<()> {
    let n = y.len();
    if n < 3 {
        return Err(PotentialError::CalculationError(
            "Numerov integration requires at least 3 grid points".to_string(),
        ));
    }
    check_len("Numerov coefficient", p, n)?;
    if let Some(s) = source {
        check_len("Numerov source", s, n)?;
    }

    let h_squared_12 = h * h / 12.0;

    // Coefficients carried between steps
    let mut c_next = 1.0 - h_squared_12 * p[n - 1];
    let mut c = 2.0 * (1.0 + 5.0 * h_squared_12 * p[n - 2]);

    for i in (1..n - 1).rev() {
        let c_prev = 1.0 - h_squared_12 * p[i - 1];

        let mut rhs = c * y[i] - c_next * y[i + 1];
        if let Some(s) = source {
            rhs += h_squared_12 * (s[i + 1] + 10.0 * s[i] + s[i - 1]);
        }
        y[i - 1] = rhs / c_prev;

        c_next = 1.0 - h_squared_12 * p[i];
        c = 2.0 * (1.0 + 5.0 * h_squared_12 * p[i - 1]);
    }

    Ok(())
}
