//! Truncated virial equation of state.

use crate::{
    coefficients::R,
    error::{SgergError, Stage},
    solve::MAX_ITERATIONS,
};

/// Pressure-balance tolerance, in bar.
const PRESSURE_TOL: f64 = 1.0e-5;

/// Molar volume and compression factor at one pressure-temperature point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EosState {
    /// Molar volume, in L/mol.
    pub molar_volume: f64,
    /// Compression factor.
    pub compression_factor: f64,
}

/// Finds the molar volume satisfying `p·v = z·R·t` for the truncated virial
/// expansion `z = 1 + B/v + C/v²`.
///
/// Starts from the ideal molar volume shifted by `B` and iterates the
/// expansion directly; convergence is judged on the pressure the trial
/// volume implies.
pub(crate) fn solve(p: f64, t: f64, b: f64, c: f64) -> Result<EosState, SgergError> {
    let rt = R * t;
    let rtp = rt / p;
    let mut v = rtp + b;

    for _ in 0..MAX_ITERATIONS {
        v = rtp * (1.0 + b / v + c / (v * v));
        let z = 1.0 + b / v + c / (v * v);
        let implied = rt / v * z;
        if (implied - p).abs() < PRESSURE_TOL {
            return Ok(EosState {
                molar_volume: v,
                compression_factor: z,
            });
        }
    }

    Err(SgergError::NotConverged {
        stage: Stage::Compressibility,
        max_iterations: MAX_ITERATIONS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn vanishing_virial_coefficients_recover_the_ideal_gas() {
        let state = solve(8.0, 288.15, 0.0, 0.0).unwrap();
        assert_relative_eq!(state.compression_factor, 1.0);
        assert_relative_eq!(state.molar_volume, R * 288.15 / 8.0);
    }

    #[test]
    fn matches_the_reference_root_at_high_pressure() {
        let state = solve(60.0, 278.15, -0.05, 0.002).unwrap();
        assert_relative_eq!(state.molar_volume, 0.334_754_546_019_904_84, epsilon = 1e-9);
        assert_relative_eq!(
            state.compression_factor,
            0.868_484_315_618_073_3,
            epsilon = 1e-9
        );
    }

    #[test]
    fn converged_volume_reproduces_the_pressure() {
        let p = 35.0;
        let t = 250.0;
        let state = solve(p, t, -0.08, 0.004).unwrap();
        let implied = R * t / state.molar_volume * state.compression_factor;
        assert_abs_diff_eq!(implied, p, epsilon = PRESSURE_TOL);
    }
}
