//! GERG-88 virial equation for natural gas compression factors.
//!
//! Implements the SGERG-88 method: from a simplified gas analysis — carbon
//! dioxide mole fraction, superior calorific value, relative density, and
//! hydrogen mole fraction — plus pressure and temperature, the crate infers
//! the nitrogen content of the mixture and computes its compression factor
//! and molar density from a truncated virial equation of state.
//!
//! The unmeasured composition is recovered by a nested fixed point: a
//! secant iteration balances the molar mass against the relative density
//! while an outer loop balances the implied calorific value through the
//! virial correction to the reference molar volume. Every calculation is a
//! pure function of its inputs, so concurrent use needs no synchronization.
//!
//! ```
//! use sgerg::GasAnalysis;
//!
//! let analysis = GasAnalysis::new(0.01, 37.0, 0.7443, 0.0);
//! let gas = analysis.properties_at(8.0, 15.0)?;
//!
//! assert!(gas.nitrogen > 0.0);
//! assert!(gas.compression_factor < 1.0);
//! # Ok::<(), sgerg::SgergError>(())
//! ```

mod analysis;
mod composition;
mod eos;
mod error;
mod solve;
mod virial;

pub mod coefficients;

pub use analysis::{GasAnalysis, GasProperties};
pub use error::{SgergError, Stage};

/// Calculates `(x2, z, d)` from the six scalars of the standard's reference
/// interface: carbon dioxide mole fraction, calorific value in MJ/m³,
/// relative density, hydrogen mole fraction, absolute pressure in bar, and
/// temperature in °C. The returned molar density `d` is in mol/L.
///
/// # Errors
///
/// Fails like [`GasAnalysis::properties_at`].
pub fn calculate(
    x3: f64,
    hs: f64,
    rm: f64,
    x5: f64,
    p: f64,
    tc: f64,
) -> Result<(f64, f64, f64), SgergError> {
    let gas = GasAnalysis::new(x3, hs, rm, x5).properties_at(p, tc)?;
    Ok((gas.nitrogen, gas.compression_factor, gas.molar_density))
}
