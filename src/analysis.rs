//! The gas analysis input type and the calculation facade.

use uom::si::{
    f64::{MolarConcentration, Pressure, ThermodynamicTemperature},
    molar_concentration::mole_per_cubic_meter,
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

use crate::{coefficients::T0, composition, eos, error::SgergError, virial};

/// Simplified four-parameter analysis of a natural-gas mixture.
///
/// The analysis characterizes the gas by its carbon dioxide and hydrogen
/// content together with two bulk measurements, the superior calorific
/// value and the relative density. Reference conditions follow the
/// standard: metering at 0 °C and 1.01325 bar, combustion at 25 °C.
///
/// # Example
///
/// ```
/// use sgerg::GasAnalysis;
///
/// let analysis = GasAnalysis::new(0.01, 37.0, 0.7443, 0.0);
/// let gas = analysis.properties_at(8.0, 15.0)?;
///
/// assert!(gas.compression_factor < 1.0);
/// assert!(gas.nitrogen > 0.0);
/// # Ok::<(), sgerg::SgergError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasAnalysis {
    /// Carbon dioxide mole fraction, 0 to 0.3.
    pub carbon_dioxide: f64,
    /// Superior calorific value, 20 to 48 MJ/m³.
    pub calorific_value: f64,
    /// Relative density (air = 1), 0.55 to 0.9.
    pub relative_density: f64,
    /// Hydrogen mole fraction, 0 to 0.1.
    pub hydrogen: f64,
}

impl GasAnalysis {
    /// Creates an analysis from the four measured parameters.
    ///
    /// Ranges are checked when properties are calculated, not here.
    #[must_use]
    pub fn new(
        carbon_dioxide: f64,
        calorific_value: f64,
        relative_density: f64,
        hydrogen: f64,
    ) -> Self {
        Self {
            carbon_dioxide,
            calorific_value,
            relative_density,
            hydrogen,
        }
    }

    /// Calculates the gas properties at the given operating point.
    ///
    /// # Errors
    ///
    /// Fails like [`GasAnalysis::properties_at`], which this wraps after
    /// converting to the standard's units.
    pub fn properties(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<GasProperties, SgergError> {
        self.properties_at(pressure.get::<bar>(), temperature.get::<degree_celsius>())
    }

    /// Calculates the gas properties from raw scalars: absolute pressure in
    /// bar (0 to 120) and temperature in °C (−23 to 65).
    ///
    /// # Errors
    ///
    /// Returns [`SgergError::OutOfRange`] when an input or the solved
    /// nitrogen content leaves the standard's domain,
    /// [`SgergError::Inconsistent`] when the parameters cannot describe a
    /// physical mixture, [`SgergError::Domain`] when a virial mixing term
    /// has no real root, and [`SgergError::NotConverged`] when one of the
    /// bounded iterations exhausts its cap.
    pub fn properties_at(
        &self,
        pressure: f64,
        temperature: f64,
    ) -> Result<GasProperties, SgergError> {
        check_range("pressure", pressure, 0.0, 120.0)?;
        check_range("temperature", temperature, -23.0, 65.0)?;
        check_range("relative density", self.relative_density, 0.55, 0.90)?;
        check_range("carbon dioxide fraction", self.carbon_dioxide, 0.0, 0.30)?;
        check_range("calorific value", self.calorific_value, 20.0, 48.0)?;
        check_range("hydrogen fraction", self.hydrogen, 0.0, 0.10)?;

        if 0.55 + 0.97 * self.carbon_dioxide - 0.45 * self.hydrogen > self.relative_density {
            return Err(SgergError::Inconsistent(
                "carbon dioxide and hydrogen fractions conflict with the relative density",
            ));
        }

        let solved = composition::solve(self)?;

        let t = temperature + T0;
        let b11 = virial::b11(t, solved.heat_parameter);
        let b = virial::effective_b(t, b11, &solved.composition)?;
        let c = virial::effective_c(t, solved.heat_parameter, &solved.composition)?;
        let state = eos::solve(pressure, t, b, c)?;

        Ok(GasProperties {
            nitrogen: solved.composition.x2,
            compression_factor: state.compression_factor,
            molar_density: 1.0 / state.molar_volume,
        })
    }
}

/// Results of a GERG-88 calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    /// Inferred nitrogen mole fraction.
    pub nitrogen: f64,
    /// Compression factor z.
    pub compression_factor: f64,
    /// Molar density, in mol/L.
    pub molar_density: f64,
}

impl GasProperties {
    /// Molar density as a dimensioned quantity.
    #[must_use]
    pub fn molar_concentration(&self) -> MolarConcentration {
        MolarConcentration::new::<mole_per_cubic_meter>(self.molar_density * 1.0e3)
    }
}

fn check_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), SgergError> {
    if value < min || value > max {
        return Err(SgergError::OutOfRange {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}
