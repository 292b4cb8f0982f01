//! Material property model trait and validation helpers.

use crate::catalog::Phase;
use crate::error::{MaterialError, MaterialResult};
use chill_core::units::{
    Density, HeatCapacity, Pressure, SpecificHeatCapacity, Temperature, Volume, j_per_k,
};

/// Properties of a material at one (T, p) state.
#[derive(Clone, Copy, Debug)]
pub struct MaterialProperties {
    pub phase: Phase,
    /// Density [kg/m³]
    pub density: Density,
    /// Specific heat at constant pressure [J/(kg·K)]
    pub specific_heat: SpecificHeatCapacity,
}

impl MaterialProperties {
    /// Heat capacity `ρ·V·c_p` [J/K] of a body of the given volume.
    pub fn heat_capacity(&self, volume: Volume) -> MaterialResult<HeatCapacity> {
        validation::validate_volume(volume)?;
        let c = self.density.value * volume.value * self.specific_heat.value;
        if !c.is_finite() || c <= 0.0 {
            return Err(MaterialError::NonPhysical {
                what: "heat capacity must be positive and finite",
            });
        }
        Ok(j_per_k(c))
    }
}

/// Trait for material property models.
///
/// Implementations must be thread-safe (Send + Sync) so that independent
/// networks can share one model.
pub trait MaterialModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Density and specific heat of `material` at temperature `t` and pressure `p`.
    ///
    /// Fails with `NotFound` for unknown identifiers and `InvalidState` when
    /// the material is not in the described phase at (t, p).
    fn properties(
        &self,
        material: &str,
        t: Temperature,
        p: Pressure,
    ) -> MaterialResult<MaterialProperties>;

    /// Heat capacity [J/K] of `volume` of `material` at (t, p).
    fn heat_capacity(
        &self,
        material: &str,
        t: Temperature,
        p: Pressure,
        volume: Volume,
    ) -> MaterialResult<HeatCapacity> {
        validation::validate_volume(volume)?;
        self.properties(material, t, p)?.heat_capacity(volume)
    }
}

/// Validation helpers for material properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> MaterialResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(MaterialError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> MaterialResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(MaterialError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure volume is positive and finite.
    pub fn validate_volume(v: Volume) -> MaterialResult<()> {
        if !v.value.is_finite() || v.value <= 0.0 {
            return Err(MaterialError::InvalidArg {
                what: "volume must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: Density) -> MaterialResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(MaterialError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure specific heat capacity is positive and finite.
    pub fn validate_specific_heat(cp: SpecificHeatCapacity) -> MaterialResult<()> {
        if !cp.value.is_finite() || cp.value <= 0.0 {
            return Err(MaterialError::NonPhysical {
                what: "specific heat must be positive and finite",
            });
        }
        Ok(())
    }
}
