//! Inference of the unmeasured mole fractions from the gas analysis.
//!
//! The four measured parameters leave two unknowns: the heat parameter `h`
//! of the equivalent hydrocarbon and the nitrogen fraction. They are pinned
//! down by a two-level fixed point. The inner loop balances the molar mass
//! against the relative density by secant steps on `h`; the outer loop
//! balances the implied calorific value, which feeds back through the
//! virial correction to the reference molar volume.

use crate::{
    GasAnalysis,
    coefficients::{CO_PER_H2, FA, GM1R0, GM1R1, GM2, GM3, GM5, GM7, H5, H7, RL, T0},
    error::{SgergError, Stage},
    solve::{self, MAX_ITERATIONS},
    virial,
};

/// Molar-mass balance tolerance, on the reference density in kg/m³.
const MOLAR_MASS_TOL: f64 = 1.0e-6;
/// Calorific-value balance tolerance, in MJ/m³.
const CALORIFIC_TOL: f64 = 1.0e-4;

/// Nominal effective B seeding the molar-volume correction, in L/mol.
const B_EFF_SEED: f64 = -0.065;
/// Nominal heat-parameter seed, in kJ/mol.
const HEAT_SEED: f64 = 1000.0;

/// Bounds accepted for the solved nitrogen fraction.
const NITROGEN_MIN: f64 = -0.01;
const NITROGEN_MAX: f64 = 0.5;

/// Mole fractions of the five SGERG pseudo-components.
///
/// The fractions sum to one by construction: `x1` and `x2` are derived from
/// the measured components and the heat parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Composition {
    /// Equivalent hydrocarbon.
    pub x1: f64,
    /// Nitrogen.
    pub x2: f64,
    /// Carbon dioxide.
    pub x3: f64,
    /// Hydrogen.
    pub x5: f64,
    /// Carbon monoxide.
    pub x7: f64,
}

impl Composition {
    /// Derives the full composition from the heat parameter and the current
    /// molar-volume correction `amol` (mol/L).
    fn from_heat_parameter(h: f64, amol: f64, analysis: &GasAnalysis) -> Self {
        let x3 = analysis.carbon_dioxide;
        let x5 = analysis.hydrogen;
        let x7 = CO_PER_H2 * x5;
        let x1 = (analysis.calorific_value - (x5 * H5 + x7 * H7) * amol) / (h * amol);
        let x2 = 1.0 - x1 - x3 - x5 - x7;
        Self { x1, x2, x3, x5, x7 }
    }

    /// Mass density this composition implies at the metering reference
    /// conditions, in kg/m³.
    fn reference_density(&self, h: f64, amol: f64) -> f64 {
        let gm1 = GM1R0 + GM1R1 * h;
        (self.x1 * gm1 + self.x2 * GM2 + self.x3 * GM3 + self.x5 * GM5 + self.x7 * GM7) * amol
    }
}

/// A converged composition with its frozen heat parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SolvedComposition {
    pub composition: Composition,
    /// Molar calorific value of the equivalent hydrocarbon, in kJ/mol.
    pub heat_parameter: f64,
}

/// Solves the two-level fixed point for the unmeasured composition.
pub(crate) fn solve(analysis: &GasAnalysis) -> Result<SolvedComposition, SgergError> {
    let target_density = analysis.relative_density * RL;
    let mut amol = 1.0 / (FA + B_EFF_SEED);
    let mut h = HEAT_SEED;
    let mut inner_budget = MAX_ITERATIONS;
    let mut outer_iterations = 0;

    loop {
        // Molar-mass balance at the current molar-volume correction. The
        // secant budget carries over between re-entries instead of resetting.
        let residual = |h: f64| {
            let trial = Composition::from_heat_parameter(h, amol, analysis);
            target_density - trial.reference_density(h, amol)
        };
        let root = solve::secant(residual, h, MOLAR_MASS_TOL, inner_budget).ok_or(
            SgergError::NotConverged {
                stage: Stage::MolarMass,
                max_iterations: MAX_ITERATIONS,
            },
        )?;
        h = root.value;
        inner_budget -= root.iterations;

        let composition = Composition::from_heat_parameter(h, amol, analysis);

        // The effective B at reference conditions updates the molar-volume
        // correction, which shifts both balances.
        let b11 = virial::b11(T0, h);
        let b_eff = virial::effective_b(T0, b11, &composition)?;
        amol = 1.0 / (FA + b_eff);

        let implied_calorific =
            (composition.x1 * h + composition.x5 * H5 + composition.x7 * H7) * amol;
        if (analysis.calorific_value - implied_calorific).abs() <= CALORIFIC_TOL {
            check_solved(&composition, analysis)?;
            return Ok(SolvedComposition {
                composition,
                heat_parameter: h,
            });
        }

        outer_iterations += 1;
        if outer_iterations > MAX_ITERATIONS {
            return Err(SgergError::NotConverged {
                stage: Stage::CalorificValue,
                max_iterations: MAX_ITERATIONS,
            });
        }
    }
}

/// Rejects converged compositions the standard does not cover.
fn check_solved(composition: &Composition, analysis: &GasAnalysis) -> Result<(), SgergError> {
    let Composition { x2, x3, x5, .. } = *composition;

    if !(NITROGEN_MIN..=NITROGEN_MAX).contains(&x2) {
        return Err(SgergError::OutOfRange {
            parameter: "nitrogen fraction",
            value: x2,
            min: NITROGEN_MIN,
            max: NITROGEN_MAX,
        });
    }
    if x2 + x3 > 0.5 {
        return Err(SgergError::OutOfRange {
            parameter: "nitrogen + carbon dioxide fraction",
            value: x2 + x3,
            min: 0.0,
            max: 0.5,
        });
    }
    if 0.55 + 0.4 * x2 + 0.97 * x3 - 0.45 * x5 > analysis.relative_density {
        return Err(SgergError::Inconsistent(
            "solved nitrogen fraction conflicts with the relative density",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_analysis() -> GasAnalysis {
        GasAnalysis::new(0.01, 37.0, 0.7443, 0.0)
    }

    #[test]
    fn fractions_sum_to_one() {
        let solved = solve(&reference_analysis()).unwrap();
        let x = solved.composition;
        assert_abs_diff_eq!(x.x1 + x.x2 + x.x3 + x.x5 + x.x7, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn infers_the_reference_nitrogen_fraction() {
        let solved = solve(&reference_analysis()).unwrap();
        assert_relative_eq!(
            solved.composition.x2,
            0.206_119_332_571_283_45,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            solved.composition.x1,
            0.783_880_667_428_716_5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn solving_twice_is_bit_identical() {
        let first = solve(&reference_analysis()).unwrap();
        let second = solve(&reference_analysis()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hydrogen_brings_carbon_monoxide_along() {
        let analysis = GasAnalysis::new(0.06, 40.0, 0.86, 0.05);
        let solved = solve(&analysis).unwrap();
        assert_relative_eq!(solved.composition.x7, 0.0964 * 0.05);
    }

    #[test]
    fn rejects_nitrogen_outside_the_standard() {
        let err = check_solved(
            &Composition {
                x1: 0.4,
                x2: 0.56,
                x3: 0.04,
                x5: 0.0,
                x7: 0.0,
            },
            &reference_analysis(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SgergError::OutOfRange {
                parameter: "nitrogen fraction",
                ..
            }
        ));
    }

    #[test]
    fn rejects_excessive_inert_content() {
        let err = check_solved(
            &Composition {
                x1: 0.48,
                x2: 0.30,
                x3: 0.22,
                x5: 0.0,
                x7: 0.0,
            },
            &GasAnalysis::new(0.22, 25.0, 0.9, 0.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SgergError::OutOfRange {
                parameter: "nitrogen + carbon dioxide fraction",
                ..
            }
        ));
    }

    #[test]
    fn rejects_a_conflicting_solution() {
        let err = check_solved(
            &Composition {
                x1: 0.85,
                x2: 0.14,
                x3: 0.01,
                x5: 0.0,
                x7: 0.0,
            },
            &GasAnalysis::new(0.01, 37.0, 0.58, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, SgergError::Inconsistent(_)));
    }
}
