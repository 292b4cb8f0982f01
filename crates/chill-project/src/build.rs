//! Turn a validated document into a network and a simulation.

use std::collections::HashMap;

use chill_core::units::{k, m3, pa};
use chill_graph::{EdgeKind, Network, NodeHandle};
use chill_materials::MaterialModel;
use chill_sim::{IntegratorType, SimConfig, Simulation};
use tracing::info;

use crate::ProjectResult;
use crate::schema::{CapacityDef, EdgeKindDef, IntegratorDef, NetworkDef, SettingsDef};
use crate::validate::validate_network_def;

pub fn sim_config(settings: &SettingsDef) -> SimConfig {
    SimConfig {
        dt: settings.dt_s,
        integrator: match settings.integrator {
            IntegratorDef::ForwardEuler => IntegratorType::ForwardEuler,
            IntegratorDef::RK4 => IntegratorType::RK4,
        },
        max_step_change: settings.max_step_change_k,
    }
}

/// Build the network described by `def`.
///
/// Nodes are named by their document id; heater source nodes get
/// `"<heater id>.source"`. Material capacities are resolved through `model`.
pub fn build_network(def: &NetworkDef, model: &dyn MaterialModel) -> ProjectResult<Network> {
    validate_network_def(def)?;

    let mut network = Network::new();
    let mut handles: HashMap<&str, NodeHandle> = HashMap::with_capacity(def.nodes.len());

    for node in &def.nodes {
        let handle = match &node.capacity {
            CapacityDef::Fixed { j_per_k } => {
                network.define_node(node.temperature_k, *j_per_k, node.id.as_str())
            }
            CapacityDef::Infinite => {
                network.define_node(node.temperature_k, f64::INFINITY, node.id.as_str())
            }
            CapacityDef::Material {
                material,
                volume_m3,
                pressure_pa,
            } => network.define_object(
                model,
                material,
                k(node.temperature_k),
                pa(*pressure_pa),
                m3(*volume_m3),
                node.id.as_str(),
            )?,
        };
        handles.insert(node.id.as_str(), handle);
    }

    for edge in &def.edges {
        let (kind, parameter) = match edge.kind {
            EdgeKindDef::Conduction { resistance_k_per_w } => {
                (EdgeKind::Conduction, resistance_k_per_w)
            }
            EdgeKindDef::Radiation {
                coefficient_w_per_k4,
            } => (EdgeKind::Radiation, coefficient_w_per_k4),
            EdgeKindDef::HeatInput { power_w } => (EdgeKind::HeatInput, power_w),
        };
        network.define_edge(
            handles[edge.from.as_str()],
            handles[edge.to.as_str()],
            parameter,
            kind,
            edge.id.as_str(),
        )?;
    }

    for heater in &def.heaters {
        network.define_heater(
            handles[heater.target.as_str()],
            heater.power_w,
            heater.id.as_str(),
        )?;
    }

    info!(
        name = %def.name,
        nodes = network.nodes().len(),
        edges = network.edges().len(),
        "network built"
    );
    Ok(network)
}

/// Build the network and a simulation that is already set up.
pub fn build_simulation(def: &NetworkDef, model: &dyn MaterialModel) -> ProjectResult<Simulation> {
    let network = build_network(def, model)?;
    let mut sim = Simulation::new(network, sim_config(&def.settings))?;
    sim.setup()?;
    Ok(sim)
}
