//! Network document schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub settings: SettingsDef,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default)]
    pub heaters: Vec<HeaterDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsDef {
    pub dt_s: f64,
    #[serde(default)]
    pub integrator: IntegratorDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_step_change_k: Option<f64>,
}

impl Default for SettingsDef {
    fn default() -> Self {
        Self {
            dt_s: 0.1,
            integrator: IntegratorDef::default(),
            max_step_change_k: Some(1e8),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum IntegratorDef {
    #[default]
    ForwardEuler,
    RK4,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    pub temperature_k: f64,
    pub capacity: CapacityDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CapacityDef {
    Fixed {
        j_per_k: f64,
    },
    /// Fixed-temperature reservoir.
    Infinite,
    Material {
        material: String,
        volume_m3: f64,
        #[serde(default = "default_pressure_pa")]
        pressure_pa: f64,
    },
}

fn default_pressure_pa() -> f64 {
    chill_core::units::constants::STANDARD_ATMOSPHERE_PA
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub id: String,
    pub from: String,
    pub to: String,
    pub kind: EdgeKindDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum EdgeKindDef {
    Conduction { resistance_k_per_w: f64 },
    Radiation { coefficient_w_per_k4: f64 },
    HeatInput { power_w: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaterDef {
    pub id: String,
    pub target: String,
    pub power_w: f64,
}
