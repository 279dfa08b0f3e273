//! Effective second and third virial coefficients of the mixture.
//!
//! Both evaluators are pure in `(t, h, composition)` and are called twice
//! per calculation: once at the metering reference temperature while the
//! composition is being solved, and once at the working temperature for the
//! equation of state.

use crate::{
    coefficients::{
        B25, BR11H0, BR11H1, BR11H2, BR15, BR17, BR22, BR23, BR33, BR55, BR77, CR111H0, CR111H1,
        CR111H2, CR117, CR222, CR223, CR233, CR333, CR555, Y12, Y13, Y115, Y123, Z12, Z13,
    },
    composition::Composition,
    error::SgergError,
};

/// Quadratic temperature polynomial from the coefficient table.
fn poly(c: [f64; 3], t: f64) -> f64 {
    c[0] + c[1] * t + c[2] * t * t
}

/// Real root of a mixing-rule radicand.
///
/// The combining rules need real square and cube roots of coefficient
/// products; a negative product means the mixture has no physical solution
/// at this temperature.
fn real_root(radicand: f64, exponent: f64, coefficient: &'static str) -> Result<f64, SgergError> {
    if radicand < 0.0 {
        return Err(SgergError::Domain { coefficient });
    }
    Ok(radicand.powf(exponent))
}

/// Second virial coefficient of the equivalent hydrocarbon, quadratic in
/// both temperature and the heat parameter.
pub(crate) fn b11(t: f64, h: f64) -> f64 {
    poly(BR11H0, t) + poly(BR11H1, t) * h + poly(BR11H2, t) * h * h
}

/// Mixture second virial coefficient at temperature `t`, in L/mol.
pub(crate) fn effective_b(t: f64, b11: f64, x: &Composition) -> Result<f64, SgergError> {
    let b22 = poly(BR22, t);
    let b23 = poly(BR23, t);
    let b33 = poly(BR33, t);
    let b15 = poly(BR15, t);
    let b55 = poly(BR55, t);
    let b17 = poly(BR17, t);
    let b77 = poly(BR77, t);

    let b13 = real_root(b11 * b33, 0.5, "B")?;

    // The hydrocarbon-nitrogen interaction strengthens away from 320 K.
    let z12 = Z12 + (320.0 - t) * (320.0 - t) * 1.875e-5;

    Ok(x.x1 * x.x1 * b11
        + x.x1 * x.x2 * z12 * (b11 + b22)
        + 2.0 * x.x1 * x.x3 * Z13 * b13
        + x.x2 * x.x2 * b22
        + 2.0 * x.x2 * x.x3 * b23
        + x.x3 * x.x3 * b33
        + x.x5 * x.x5 * b55
        + 2.0 * x.x1 * x.x5 * b15
        + 2.0 * x.x2 * x.x5 * B25
        + 2.0 * x.x1 * x.x7 * b17
        + x.x7 * x.x7 * b77)
}

/// Mixture third virial coefficient at temperature `t`, in (L/mol)².
pub(crate) fn effective_c(t: f64, h: f64, x: &Composition) -> Result<f64, SgergError> {
    let c111 = poly(CR111H0, t) + poly(CR111H1, t) * h + poly(CR111H2, t) * h * h;
    let c222 = poly(CR222, t);
    let c223 = poly(CR223, t);
    let c233 = poly(CR233, t);
    let c333 = poly(CR333, t);
    let c555 = poly(CR555, t);
    let c117 = poly(CR117, t);

    const CUBE: f64 = 1.0 / 3.0;
    let c112 = real_root(c111 * c111 * c222, CUBE, "C")?;
    let c113 = real_root(c111 * c111 * c333, CUBE, "C")?;
    let c122 = real_root(c111 * c222 * c222, CUBE, "C")?;
    let c123 = real_root(c111 * c222 * c333, CUBE, "C")?;
    let c133 = real_root(c111 * c333 * c333, CUBE, "C")?;
    let c115 = real_root(c111 * c111 * c555, CUBE, "C")?;

    // The hydrocarbon-nitrogen weight drifts linearly with temperature.
    let y12 = Y12 + (t - 270.0) * 0.0013;

    Ok(x.x1 * x.x1 * x.x1 * c111
        + 3.0 * x.x1 * x.x1 * x.x2 * c112 * y12
        + 3.0 * x.x1 * x.x1 * x.x3 * c113 * Y13
        + 3.0 * x.x1 * x.x1 * x.x5 * c115 * Y115
        + 3.0 * x.x1 * x.x2 * x.x2 * c122 * y12
        + 6.0 * x.x1 * x.x2 * x.x3 * c123 * Y123
        + 3.0 * x.x1 * x.x3 * x.x3 * c133 * Y13
        + x.x2 * x.x2 * x.x2 * c222
        + 3.0 * x.x2 * x.x2 * x.x3 * c223
        + 3.0 * x.x2 * x.x3 * x.x3 * c233
        + x.x3 * x.x3 * x.x3 * c333
        + x.x5 * x.x5 * x.x5 * c555
        + 3.0 * x.x1 * x.x1 * x.x7 * c117)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn methane_like() -> Composition {
        Composition {
            x1: 0.89,
            x2: 0.08,
            x3: 0.03,
            x5: 0.0,
            x7: 0.0,
        }
    }

    #[test]
    fn b11_matches_the_polynomial_fit() {
        assert_relative_eq!(b11(300.0, 1000.0), -0.058_125_800_000_000_23, epsilon = 1e-12);
        assert_relative_eq!(b11(273.15, 1000.0), -0.072_462_970_136_450_12, epsilon = 1e-12);
    }

    #[test]
    fn effective_b_is_negative_for_pipeline_gas() {
        let b = effective_b(288.15, b11(288.15, 900.0), &methane_like()).unwrap();
        assert!(b < 0.0 && b > -0.1, "unexpected B = {b}");
    }

    #[test]
    fn positive_b11_has_no_real_cross_term() {
        // B33 is negative at pipeline temperatures, so a positive B11 leaves
        // the 1-3 cross term without a real square root.
        let err = effective_b(288.15, 0.01, &methane_like()).unwrap_err();
        assert_eq!(err, SgergError::Domain { coefficient: "B" });
    }

    #[test]
    fn effective_c_is_small_and_positive_for_pipeline_gas() {
        let c = effective_c(288.15, 900.0, &methane_like()).unwrap();
        assert!(c > 0.0 && c < 0.01, "unexpected C = {c}");
    }

    #[test]
    fn evaluators_are_pure_across_temperatures() {
        let x = methane_like();
        let at_reference = effective_b(273.15, b11(273.15, 900.0), &x).unwrap();
        let _working = effective_b(330.0, b11(330.0, 900.0), &x).unwrap();

        // A second reference-temperature call is unaffected by the working
        // temperature call in between.
        assert_eq!(
            effective_b(273.15, b11(273.15, 900.0), &x).unwrap(),
            at_reference
        );
    }
}
