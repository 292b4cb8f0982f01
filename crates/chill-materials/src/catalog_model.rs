//! Catalog-backed material model.

use crate::catalog::{DensityLaw, MaterialCatalogEntry, material_catalog};
use crate::error::{MaterialError, MaterialResult};
use crate::model::{MaterialModel, MaterialProperties, validation};
use chill_core::units::constants::GAS_CONSTANT;
use chill_core::units::{Pressure, Temperature, j_per_kg_k, kg_per_m3};

/// Material model backed by the built-in catalog plus any registered entries.
///
/// Solids and liquids use constant density and specific heat over their valid
/// temperature range; gases follow the ideal-gas law for density.
#[derive(Debug, Clone, Default)]
pub struct CatalogModel {
    extra: Vec<MaterialCatalogEntry>,
}

impl CatalogModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional entry. Registered entries shadow built-in ones
    /// with the same name.
    pub fn with_entry(mut self, entry: MaterialCatalogEntry) -> Self {
        self.extra.push(entry);
        self
    }

    /// Resolve an identifier, most recently registered entry first.
    pub fn entry(&self, material: &str) -> Option<&MaterialCatalogEntry> {
        self.extra
            .iter()
            .rev()
            .chain(material_catalog().iter())
            .find(|entry| entry.is_named(material))
    }

    fn density(entry: &MaterialCatalogEntry, t: Temperature, p: Pressure) -> f64 {
        match entry.density {
            DensityLaw::Constant { kg_per_m3 } => kg_per_m3,
            DensityLaw::IdealGas {
                molar_mass_kg_per_mol,
            } => p.value * molar_mass_kg_per_mol / (GAS_CONSTANT * t.value),
        }
    }
}

impl MaterialModel for CatalogModel {
    fn name(&self) -> &str {
        "catalog"
    }

    fn properties(
        &self,
        material: &str,
        t: Temperature,
        p: Pressure,
    ) -> MaterialResult<MaterialProperties> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;

        let entry = self
            .entry(material)
            .ok_or_else(|| MaterialError::NotFound {
                material: material.to_string(),
            })?;

        if !entry.covers_temperature(t.value) {
            return Err(MaterialError::InvalidState {
                material: entry.canonical_id.to_string(),
                reason: format!(
                    "{:?} phase valid for {}..{} K, got {} K",
                    entry.phase, entry.min_temperature_k, entry.max_temperature_k, t.value
                ),
            });
        }

        let density = kg_per_m3(Self::density(entry, t, p));
        let specific_heat = j_per_kg_k(entry.specific_heat_j_per_kg_k);
        validation::validate_density(density)?;
        validation::validate_specific_heat(specific_heat)?;

        Ok(MaterialProperties {
            phase: entry.phase,
            density,
            specific_heat,
        })
    }
}
