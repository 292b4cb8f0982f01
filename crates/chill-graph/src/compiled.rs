//! Flat array form of a network for the integrator.
//!
//! Node `i` of the network owns slot `i` of `temperatures`/`capacities`;
//! edge `j` owns slot `j` of `parameters`/`connections`/`edge_kinds`.

use chill_core::{EdgeId, Real};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, EdgeKind, Node};
use crate::validate;

/// Setup-time snapshot of a network as parallel arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledState {
    temperatures: Vec<Real>,
    capacities: Vec<Real>,
    parameters: Vec<Real>,
    /// `[from, to]` node indices per edge.
    connections: Vec<[usize; 2]>,
    edge_kinds: Vec<EdgeKind>,
}

impl CompiledState {
    /// Flatten validated node and edge arenas.
    pub fn compile(nodes: &[Node], edges: &[Edge]) -> GraphResult<Self> {
        validate::validate_nodes(nodes)?;
        validate::validate_edges(nodes.len(), edges)?;

        Ok(Self {
            temperatures: nodes.iter().map(|n| n.temperature).collect(),
            capacities: nodes.iter().map(|n| n.capacity).collect(),
            parameters: edges.iter().map(|e| e.parameter).collect(),
            connections: edges
                .iter()
                .map(|e| [e.from().slot(), e.to().slot()])
                .collect(),
            edge_kinds: edges.iter().map(|e| e.kind).collect(),
        })
    }

    /// Build directly from arrays, applying the same checks as `compile`.
    pub fn from_arrays(
        temperatures: Vec<Real>,
        capacities: Vec<Real>,
        parameters: Vec<Real>,
        connections: Vec<[usize; 2]>,
        edge_kinds: Vec<EdgeKind>,
    ) -> GraphResult<Self> {
        check_len("capacities", temperatures.len(), capacities.len())?;
        check_len("connections", parameters.len(), connections.len())?;
        check_len("edge_kinds", parameters.len(), edge_kinds.len())?;

        for (i, (&t, &c)) in temperatures.iter().zip(&capacities).enumerate() {
            validate::validate_node_values(i, t, c)?;
        }
        for (j, ((&p, conn), &kind)) in parameters
            .iter()
            .zip(&connections)
            .zip(&edge_kinds)
            .enumerate()
        {
            let edge = EdgeId::from_index(j as u32);
            for &node in conn {
                if node >= temperatures.len() {
                    return Err(GraphError::InvalidNodeRef {
                        edge,
                        node: chill_core::NodeId::from_index(node as u32),
                    });
                }
            }
            validate::validate_parameter(edge, kind, p)?;
        }

        Ok(Self {
            temperatures,
            capacities,
            parameters,
            connections,
            edge_kinds,
        })
    }

    pub fn node_count(&self) -> usize {
        self.temperatures.len()
    }

    pub fn edge_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn temperatures(&self) -> &[Real] {
        &self.temperatures
    }

    pub fn capacities(&self) -> &[Real] {
        &self.capacities
    }

    pub fn parameters(&self) -> &[Real] {
        &self.parameters
    }

    pub fn connections(&self) -> &[[usize; 2]] {
        &self.connections
    }

    pub fn edge_kinds(&self) -> &[EdgeKind] {
        &self.edge_kinds
    }

    /// Replace the temperature array (commit after integration).
    pub fn set_temperatures(&mut self, temperatures: Vec<Real>) -> GraphResult<()> {
        check_len("temperatures", self.temperatures.len(), temperatures.len())?;
        self.temperatures = temperatures;
        Ok(())
    }

    /// Stored energy `Σ C_i·T_i` [J] over the finite-capacity nodes.
    pub fn stored_energy(&self) -> Real {
        self.temperatures
            .iter()
            .zip(&self.capacities)
            .filter(|&(_, c)| c.is_finite())
            .map(|(t, c)| t * c)
            .sum()
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> GraphResult<()> {
    if expected != actual {
        return Err(GraphError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}
