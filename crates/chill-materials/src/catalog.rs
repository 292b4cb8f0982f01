//! Built-in catalog of common materials.

/// Aggregate phase a catalog entry is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

/// How density depends on the thermodynamic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityLaw {
    /// Incompressible, constant density [kg/m³].
    Constant { kg_per_m3: f64 },
    /// Ideal gas: ρ = p·M / (R·T), molar mass in kg/mol.
    IdealGas { molar_mass_kg_per_mol: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialCatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub phase: Phase,
    pub density: DensityLaw,
    /// Specific heat at constant pressure [J/(kg·K)]
    pub specific_heat_j_per_kg_k: f64,
    /// Lowest temperature at which the entry describes the material [K]
    pub min_temperature_k: f64,
    /// Highest temperature (melting / boiling / decomposition point) [K]
    pub max_temperature_k: f64,
}

impl MaterialCatalogEntry {
    /// Substring search over id, display name and aliases.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    /// Exact, case-insensitive match on id, display name or an alias.
    pub fn is_named(&self, id: &str) -> bool {
        let id = id.trim();
        self.canonical_id.eq_ignore_ascii_case(id)
            || self.display_name.eq_ignore_ascii_case(id)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(id))
    }

    pub fn covers_temperature(&self, t_k: f64) -> bool {
        t_k >= self.min_temperature_k && t_k <= self.max_temperature_k
    }
}

const MATERIAL_CATALOG: [MaterialCatalogEntry; 14] = [
    MaterialCatalogEntry {
        canonical_id: "Al",
        display_name: "Aluminium",
        aliases: &["aluminum"],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 2700.0 },
        specific_heat_j_per_kg_k: 897.0,
        min_temperature_k: 0.0,
        max_temperature_k: 933.47,
    },
    MaterialCatalogEntry {
        canonical_id: "Cu",
        display_name: "Copper",
        aliases: &[],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 8960.0 },
        specific_heat_j_per_kg_k: 385.0,
        min_temperature_k: 0.0,
        max_temperature_k: 1357.77,
    },
    MaterialCatalogEntry {
        canonical_id: "Fe",
        display_name: "Iron",
        aliases: &[],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 7874.0 },
        specific_heat_j_per_kg_k: 449.0,
        min_temperature_k: 0.0,
        max_temperature_k: 1811.0,
    },
    MaterialCatalogEntry {
        canonical_id: "SUS304",
        display_name: "Stainless Steel 304",
        aliases: &["stainless steel", "ss304"],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 8000.0 },
        specific_heat_j_per_kg_k: 500.0,
        min_temperature_k: 0.0,
        max_temperature_k: 1673.0,
    },
    MaterialCatalogEntry {
        canonical_id: "Ti",
        display_name: "Titanium",
        aliases: &[],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 4506.0 },
        specific_heat_j_per_kg_k: 523.0,
        min_temperature_k: 0.0,
        max_temperature_k: 1941.0,
    },
    MaterialCatalogEntry {
        canonical_id: "Au",
        display_name: "Gold",
        aliases: &[],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 19_300.0 },
        specific_heat_j_per_kg_k: 129.0,
        min_temperature_k: 0.0,
        max_temperature_k: 1337.33,
    },
    MaterialCatalogEntry {
        canonical_id: "Ag",
        display_name: "Silver",
        aliases: &[],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 10_490.0 },
        specific_heat_j_per_kg_k: 235.0,
        min_temperature_k: 0.0,
        max_temperature_k: 1234.93,
    },
    MaterialCatalogEntry {
        canonical_id: "Borosilicate",
        display_name: "Borosilicate Glass",
        aliases: &["glass", "pyrex"],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 2230.0 },
        specific_heat_j_per_kg_k: 830.0,
        min_temperature_k: 0.0,
        max_temperature_k: 1093.0,
    },
    MaterialCatalogEntry {
        canonical_id: "PTFE",
        display_name: "Polytetrafluoroethylene",
        aliases: &["teflon"],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 2200.0 },
        specific_heat_j_per_kg_k: 1000.0,
        min_temperature_k: 0.0,
        max_temperature_k: 600.0,
    },
    MaterialCatalogEntry {
        canonical_id: "Ice",
        display_name: "Ice",
        aliases: &["h2o(s)"],
        phase: Phase::Solid,
        density: DensityLaw::Constant { kg_per_m3: 917.0 },
        specific_heat_j_per_kg_k: 2050.0,
        min_temperature_k: 0.0,
        max_temperature_k: 273.15,
    },
    MaterialCatalogEntry {
        canonical_id: "H2O",
        display_name: "Water",
        aliases: &["h2o(l)"],
        phase: Phase::Liquid,
        density: DensityLaw::Constant { kg_per_m3: 997.0 },
        specific_heat_j_per_kg_k: 4184.0,
        min_temperature_k: 273.15,
        max_temperature_k: 373.15,
    },
    MaterialCatalogEntry {
        canonical_id: "Air",
        display_name: "Air",
        aliases: &["atmosphere"],
        phase: Phase::Gas,
        density: DensityLaw::IdealGas {
            molar_mass_kg_per_mol: 0.028_964_7,
        },
        specific_heat_j_per_kg_k: 1005.0,
        min_temperature_k: 78.8,
        max_temperature_k: 2000.0,
    },
    MaterialCatalogEntry {
        canonical_id: "N2",
        display_name: "Nitrogen",
        aliases: &[],
        phase: Phase::Gas,
        density: DensityLaw::IdealGas {
            molar_mass_kg_per_mol: 0.028_013_4,
        },
        specific_heat_j_per_kg_k: 1040.0,
        min_temperature_k: 77.36,
        max_temperature_k: 2000.0,
    },
    MaterialCatalogEntry {
        canonical_id: "He",
        display_name: "Helium",
        aliases: &[],
        phase: Phase::Gas,
        density: DensityLaw::IdealGas {
            molar_mass_kg_per_mol: 0.004_002_6,
        },
        specific_heat_j_per_kg_k: 5193.0,
        min_temperature_k: 4.22,
        max_temperature_k: 2000.0,
    },
];

pub fn material_catalog() -> &'static [MaterialCatalogEntry] {
    &MATERIAL_CATALOG
}

pub fn filter_material_catalog(query: &str) -> Vec<MaterialCatalogEntry> {
    material_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Resolve an identifier (id, display name or alias) to its entry.
pub fn find_material(id: &str) -> Option<&'static MaterialCatalogEntry> {
    material_catalog().iter().find(|entry| entry.is_named(id))
}
