//! Incremental network builder with an explicit setup state machine.

use std::collections::HashMap;

use chill_core::units::{Pressure, Temperature, Volume};
use chill_core::{EdgeId, NodeId, Real};
use chill_materials::MaterialModel;
use tracing::debug;

use crate::compiled::CompiledState;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, EdgeKind, NetworkTag, Node, NodeHandle};

/// Setup state of a network.
///
/// Every topology or temperature change drops back to `Unconfigured`;
/// only `Network::setup` enters `Compiled`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NetworkState {
    #[default]
    Unconfigured,
    Compiled(CompiledState),
}

/// A thermal network: an append-only arena of nodes and edges.
///
/// Order is significant: a node's position in the arena is its index in the
/// compiled arrays.
#[derive(Debug)]
pub struct Network {
    tag: NetworkTag,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    names: HashMap<String, NodeId>,
    state: NetworkState,
}

/// A clone is a separate network: it gets its own tag, so handles issued by
/// the original are foreign to it and vice versa. Use `handle` or
/// `find_node` to obtain handles for the copy.
impl Clone for Network {
    fn clone(&self) -> Self {
        Self {
            tag: NetworkTag::fresh(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            names: self.names.clone(),
            state: self.state.clone(),
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Create a new empty network.
    pub fn new() -> Self {
        Self {
            tag: NetworkTag::fresh(),
            nodes: Vec::new(),
            edges: Vec::new(),
            names: HashMap::new(),
            state: NetworkState::Unconfigured,
        }
    }

    /// Add a node and return its handle.
    ///
    /// A non-empty `name` is registered for `find_node`; redefining a name
    /// points lookups at the newest node while older ones stay in the network.
    pub fn define_node(
        &mut self,
        temperature: Real,
        capacity: Real,
        name: impl Into<String>,
    ) -> NodeHandle {
        let id = NodeId::from_index(self.nodes.len() as u32);
        let name = name.into();
        if !name.is_empty() {
            self.names.insert(name.clone(), id);
        }
        self.nodes.push(Node {
            id,
            name,
            temperature,
            capacity,
        });
        self.invalidate();
        NodeHandle {
            network: self.tag,
            id,
        }
    }

    /// Add a node whose capacity is `ρ·c_p·V` of `material` at (`temperature`, `pressure`).
    ///
    /// Lookup failures (unknown material, material not valid at that state)
    /// are returned as `GraphError::Material` and leave the network untouched.
    pub fn define_object(
        &mut self,
        model: &dyn MaterialModel,
        material: &str,
        temperature: Temperature,
        pressure: Pressure,
        volume: Volume,
        name: impl Into<String>,
    ) -> GraphResult<NodeHandle> {
        let capacity = model.heat_capacity(material, temperature, pressure, volume)?;
        Ok(self.define_node(temperature.value, capacity.value, name))
    }

    /// Attach a constant heat source of `power` [W] to `target`.
    ///
    /// Creates a fixed-temperature source node (infinite capacity, starting at
    /// the target's temperature) and a heat-input edge from it into `target`.
    pub fn define_heater(
        &mut self,
        target: NodeHandle,
        power: Real,
        name: impl Into<String>,
    ) -> GraphResult<(NodeHandle, EdgeId)> {
        let temperature = self.node(target)?.temperature;
        let name = name.into();
        let source_name = if name.is_empty() {
            String::new()
        } else {
            format!("{name}.source")
        };
        let source = self.define_node(temperature, Real::INFINITY, source_name);
        let edge = self.define_thermal_input(source, target, power, name)?;
        Ok((source, edge))
    }

    /// Add an edge of `kind` from `node0` to `node1`.
    pub fn define_edge(
        &mut self,
        node0: NodeHandle,
        node1: NodeHandle,
        parameter: Real,
        kind: EdgeKind,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        let from = self.owned(node0)?;
        let to = self.owned(node1)?;
        if from == to {
            return Err(GraphError::SelfLoop { node: from });
        }

        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            name: name.into(),
            kind,
            parameter,
            nodes: [from, to],
        });
        self.invalidate();
        Ok(id)
    }

    /// Conduction through a thermal resistance [K/W].
    pub fn define_thermal_conduction(
        &mut self,
        node0: NodeHandle,
        node1: NodeHandle,
        resistance: Real,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        self.define_edge(node0, node1, resistance, EdgeKind::Conduction, name)
    }

    /// Radiative exchange with coefficient `ε·F·σ·A` [W/K⁴].
    pub fn define_thermal_radiation(
        &mut self,
        node0: NodeHandle,
        node1: NodeHandle,
        coefficient: Real,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        self.define_edge(node0, node1, coefficient, EdgeKind::Radiation, name)
    }

    /// Constant heat rate [W] from `node0` into `node1`.
    pub fn define_thermal_input(
        &mut self,
        node0: NodeHandle,
        node1: NodeHandle,
        power: Real,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        self.define_edge(node0, node1, power, EdgeKind::HeatInput, name)
    }

    /// `define_edge` with both endpoints resolved by name.
    pub fn define_edge_by_names(
        &mut self,
        name0: &str,
        name1: &str,
        parameter: Real,
        kind: EdgeKind,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        let node0 = self.find_node(name0)?;
        let node1 = self.find_node(name1)?;
        self.define_edge(node0, node1, parameter, kind, name)
    }

    pub fn define_thermal_conduction_by_names(
        &mut self,
        name0: &str,
        name1: &str,
        resistance: Real,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        self.define_edge_by_names(name0, name1, resistance, EdgeKind::Conduction, name)
    }

    pub fn define_thermal_radiation_by_names(
        &mut self,
        name0: &str,
        name1: &str,
        coefficient: Real,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        self.define_edge_by_names(name0, name1, coefficient, EdgeKind::Radiation, name)
    }

    pub fn define_thermal_input_by_names(
        &mut self,
        name0: &str,
        name1: &str,
        power: Real,
        name: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        self.define_edge_by_names(name0, name1, power, EdgeKind::HeatInput, name)
    }

    /// Look up the most recently defined node called `name`.
    pub fn find_node(&self, name: &str) -> GraphResult<NodeHandle> {
        self.names
            .get(name)
            .map(|&id| NodeHandle {
                network: self.tag,
                id,
            })
            .ok_or_else(|| GraphError::NodeNotFound {
                name: name.to_string(),
            })
    }

    /// Change a node's temperature. Invalidates the compiled state.
    pub fn set_temperature(&mut self, handle: NodeHandle, temperature: Real) -> GraphResult<()> {
        let id = self.owned(handle)?;
        self.nodes[id.slot()].temperature = temperature;
        self.invalidate();
        Ok(())
    }

    /// Copy simulated temperatures into the node records.
    ///
    /// Bookkeeping only: the compiled state is kept as is.
    pub fn write_back_temperatures(&mut self, temperatures: &[Real]) -> GraphResult<()> {
        if temperatures.len() != self.nodes.len() {
            return Err(GraphError::LengthMismatch {
                what: "node temperatures",
                expected: self.nodes.len(),
                actual: temperatures.len(),
            });
        }
        for (node, &t) in self.nodes.iter_mut().zip(temperatures) {
            node.temperature = t;
        }
        Ok(())
    }

    /// Rebuild the compiled arrays from the current nodes and edges.
    ///
    /// On failure the network stays `Unconfigured`.
    pub fn setup(&mut self) -> GraphResult<()> {
        self.state = NetworkState::Unconfigured;
        let compiled = CompiledState::compile(&self.nodes, &self.edges)?;
        debug!(
            nodes = compiled.node_count(),
            edges = compiled.edge_count(),
            "thermal network compiled"
        );
        self.state = NetworkState::Compiled(compiled);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, NetworkState::Compiled(_))
    }

    pub fn state(&self) -> &NetworkState {
        &self.state
    }

    /// Compiled arrays, or `NotCompiled` if the network changed since `setup()`.
    pub fn compiled(&self) -> GraphResult<&CompiledState> {
        match &self.state {
            NetworkState::Compiled(compiled) => Ok(compiled),
            NetworkState::Unconfigured => Err(GraphError::NotCompiled),
        }
    }

    pub fn compiled_mut(&mut self) -> GraphResult<&mut CompiledState> {
        match &mut self.state {
            NetworkState::Compiled(compiled) => Ok(compiled),
            NetworkState::Unconfigured => Err(GraphError::NotCompiled),
        }
    }

    /// Return all nodes in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges in index order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, handle: NodeHandle) -> GraphResult<&Node> {
        let id = self.owned(handle)?;
        Ok(&self.nodes[id.slot()])
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// Handle for the node at `index`, if any.
    pub fn handle(&self, index: usize) -> Option<NodeHandle> {
        self.nodes.get(index).map(|n| NodeHandle {
            network: self.tag,
            id: n.id,
        })
    }

    /// Check that `handle` was issued by this network.
    fn owned(&self, handle: NodeHandle) -> GraphResult<NodeId> {
        if handle.network != self.tag || handle.id.slot() >= self.nodes.len() {
            return Err(GraphError::UnownedNode { node: handle.id });
        }
        Ok(handle.id)
    }

    fn invalidate(&mut self) {
        self.state = NetworkState::Unconfigured;
    }
}
