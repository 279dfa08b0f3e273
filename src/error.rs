use std::fmt;

use thiserror::Error;

/// Errors that may occur while evaluating the GERG-88 equations.
///
/// Every error is terminal for the current calculation: the first failure
/// is returned and no partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SgergError {
    /// An input or solved quantity lies outside the range covered by the
    /// standard.
    #[error("`{parameter}` is out of range: {value} is not within [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The gas analysis cannot describe a physical mixture, even though each
    /// parameter is individually in range.
    #[error("inconsistent gas analysis: {0}")]
    Inconsistent(&'static str),

    /// A virial mixing term has a negative radicand, so the mixture has no
    /// real solution at this temperature.
    #[error("no physically viable {coefficient} coefficient: negative radicand")]
    Domain { coefficient: &'static str },

    /// A bounded iteration exceeded its cap without meeting its tolerance.
    #[error("{stage} iteration did not converge within {max_iterations} steps")]
    NotConverged {
        stage: Stage,
        max_iterations: usize,
    },
}

/// The iterative stage that failed to converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Secant iteration on the molar-mass balance.
    MolarMass,
    /// Fixed-point iteration on the calorific-value balance.
    CalorificValue,
    /// Fixed-point iteration on the truncated virial equation of state.
    Compressibility,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::MolarMass => "molar-mass",
            Stage::CalorificValue => "calorific-value",
            Stage::Compressibility => "compressibility",
        };
        f.write_str(name)
    }
}
