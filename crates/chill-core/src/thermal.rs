//! Helpers that turn geometry and material data into edge parameters.
//!
//! Conduction edges take a thermal resistance [K/W]; radiation edges take
//! the lumped coefficient `ε·F·σ·A` [W/K⁴].

use crate::error::{ChillError, ChillResult};
use crate::numeric::{Real, ensure_finite, ensure_positive};
use crate::units::constants::STEFAN_BOLTZMANN;

/// Resistance of a slab: `L / (k·A)`.
pub fn conduction_resistance(conductivity: Real, area: Real, length: Real) -> ChillResult<Real> {
    let conductivity = ensure_positive(conductivity, "thermal conductivity")?;
    let area = ensure_positive(area, "area")?;
    let length = ensure_positive(length, "length")?;
    Ok(length / (conductivity * area))
}

/// Resistance of a convective film: `1 / (h·A)`.
pub fn convection_resistance(film_coefficient: Real, area: Real) -> ChillResult<Real> {
    let h = ensure_positive(film_coefficient, "film coefficient")?;
    let area = ensure_positive(area, "area")?;
    Ok(1.0 / (h * area))
}

/// Radiation coefficient `ε·F·σ·A`.
pub fn radiation_coefficient(emissivity: Real, view_factor: Real, area: Real) -> ChillResult<Real> {
    let emissivity = ensure_finite(emissivity, "emissivity")?;
    let view_factor = ensure_finite(view_factor, "view factor")?;
    if !(0.0..=1.0).contains(&emissivity) {
        return Err(ChillError::InvalidArg {
            what: format!("emissivity must lie in [0, 1] (got {emissivity})"),
        });
    }
    if !(0.0..=1.0).contains(&view_factor) {
        return Err(ChillError::InvalidArg {
            what: format!("view factor must lie in [0, 1] (got {view_factor})"),
        });
    }
    let area = ensure_positive(area, "area")?;
    Ok(emissivity * view_factor * STEFAN_BOLTZMANN * area)
}
