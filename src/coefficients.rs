//! Fixed numeric constants of the SGERG-88 standard.
//!
//! Component indices follow the standard's numbering: 1 is the equivalent
//! hydrocarbon, 2 nitrogen, 3 carbon dioxide, 5 hydrogen, and 7 carbon
//! monoxide. Temperature polynomials are quadratic, `c[0] + c[1]·T + c[2]·T²`
//! with `T` in kelvin; second virial coefficients come out in L/mol and third
//! virial coefficients in (L/mol)².

/// Hydrocarbon self term B11, part independent of the heat parameter.
pub const BR11H0: [f64; 3] = [-0.425_468, 0.286_500e-2, -0.462_073e-5];
/// Hydrocarbon self term B11, part linear in the heat parameter.
pub const BR11H1: [f64; 3] = [0.877_118e-3, -0.556_281e-5, 0.881_510e-8];
/// Hydrocarbon self term B11, part quadratic in the heat parameter.
pub const BR11H2: [f64; 3] = [-0.824_747e-6, 0.431_436e-8, -0.608_319e-11];

/// Nitrogen self term B22.
pub const BR22: [f64; 3] = [-0.144_600, 0.740_910e-3, -0.911_950e-6];
/// Nitrogen-carbon dioxide term B23.
pub const BR23: [f64; 3] = [-0.339_693, 0.161_176e-2, -0.204_429e-5];
/// Carbon dioxide self term B33.
pub const BR33: [f64; 3] = [-0.868_340, 0.403_760e-2, -0.516_570e-5];
/// Hydrocarbon-hydrogen term B15.
pub const BR15: [f64; 3] = [-0.521_280e-1, 0.271_570e-3, -0.25e-6];
/// Hydrocarbon-carbon monoxide term B17.
pub const BR17: [f64; 3] = [-0.687_290e-1, -0.239_381e-5, 0.518_195e-6];
/// Hydrogen self term B55.
pub const BR55: [f64; 3] = [-0.110_596e-2, 0.813_385e-4, -0.987_220e-7];
/// Carbon monoxide self term B77.
pub const BR77: [f64; 3] = [-0.130_820, 0.602_540e-3, -0.644_300e-6];
/// Nitrogen-hydrogen term B25, a temperature-independent constant.
pub const B25: f64 = 0.012;

/// Hydrocarbon self term C111, part independent of the heat parameter.
pub const CR111H0: [f64; 3] = [-0.302_488, 0.195_861e-2, -0.316_302e-5];
/// Hydrocarbon self term C111, part linear in the heat parameter.
pub const CR111H1: [f64; 3] = [0.646_422e-3, -0.422_876e-5, 0.688_157e-8];
/// Hydrocarbon self term C111, part quadratic in the heat parameter.
pub const CR111H2: [f64; 3] = [-0.332_805e-6, 0.223_160e-8, -0.367_713e-11];

/// Nitrogen self term C222.
pub const CR222: [f64; 3] = [0.784_980e-2, -0.398_950e-4, 0.611_870e-7];
/// Nitrogen-rich ternary term C223.
pub const CR223: [f64; 3] = [0.552_066e-2, -0.168_609e-4, 0.157_169e-7];
/// Carbon dioxide-rich ternary term C233.
pub const CR233: [f64; 3] = [0.358_783e-2, 0.806_674e-5, -0.325_798e-7];
/// Carbon dioxide self term C333.
pub const CR333: [f64; 3] = [0.205_130e-2, 0.348_880e-4, -0.837_030e-7];
/// Hydrogen self term C555.
pub const CR555: [f64; 3] = [0.104_711e-2, -0.364_887e-5, 0.467_095e-8];
/// Hydrocarbon-carbon monoxide ternary term C117.
pub const CR117: [f64; 3] = [0.736_748e-2, -0.276_578e-4, 0.343_051e-7];

/// Hydrocarbon-nitrogen second-virial interaction parameter.
pub const Z12: f64 = 0.72;
/// Hydrocarbon-carbon dioxide second-virial interaction parameter.
pub const Z13: f64 = -0.865;
/// Hydrocarbon-nitrogen third-virial combination weight.
pub const Y12: f64 = 0.92;
/// Hydrocarbon-carbon dioxide third-virial combination weight.
pub const Y13: f64 = 0.92;
/// Hydrocarbon-nitrogen-carbon dioxide combination weight.
pub const Y123: f64 = 1.10;
/// Hydrocarbon-hydrogen combination weight.
pub const Y115: f64 = 1.2;

/// Equivalent-hydrocarbon molar mass, constant part of the linear fit in
/// the heat parameter, in g/mol.
pub const GM1R0: f64 = -2.709_328;
/// Equivalent-hydrocarbon molar mass, slope of the linear fit in the heat
/// parameter, in g/mol per kJ/mol.
pub const GM1R1: f64 = 0.021_062_199;
/// Molar mass of nitrogen, in g/mol.
pub const GM2: f64 = 28.0135;
/// Molar mass of carbon dioxide, in g/mol.
pub const GM3: f64 = 44.010;
/// Molar mass of hydrogen, in g/mol.
pub const GM5: f64 = 2.0159;
/// Molar mass of carbon monoxide, in g/mol.
pub const GM7: f64 = 28.010;

/// Molar calorific value of hydrogen, in kJ/mol.
pub const H5: f64 = 285.83;
/// Molar calorific value of carbon monoxide, in kJ/mol.
pub const H7: f64 = 282.98;

/// Ideal molar volume at 0 °C and 1.01325 bar, in L/mol.
pub const FA: f64 = 22.414_097;
/// Ideal molar volume at 15 °C and 1.01325 bar, in L/mol.
pub const FB: f64 = 22.710_811;
/// Density of dry air at the metering reference conditions, in kg/m³.
pub const RL: f64 = 1.292_923;
/// Gas constant, in bar·L/(mol·K).
pub const R: f64 = 0.083_145_1;
/// Metering reference temperature, in kelvin.
pub const T0: f64 = 273.15;

/// Carbon monoxide accompanying hydrogen in coke-oven gases, as a fixed
/// fraction of the hydrogen content.
pub const CO_PER_H2: f64 = 0.0964;
