//! Setup-time validation.

use chill_core::{EdgeId, NodeId, Real};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, EdgeKind, Node};

/// Temperatures finite; capacities positive or `+inf`.
pub(crate) fn validate_nodes(nodes: &[Node]) -> GraphResult<()> {
    for (i, node) in nodes.iter().enumerate() {
        validate_node_values(i, node.temperature, node.capacity)?;
    }
    Ok(())
}

pub(crate) fn validate_node_values(
    index: usize,
    temperature: Real,
    capacity: Real,
) -> GraphResult<()> {
    if !temperature.is_finite() {
        return Err(GraphError::NonFinite {
            what: "temperature",
            index,
            value: temperature,
        });
    }
    // +inf is the fixed-source marker; NaN, -inf, zero and negatives are not capacities.
    let valid = capacity == Real::INFINITY || (capacity.is_finite() && capacity > 0.0);
    if !valid {
        return Err(GraphError::InvalidCapacity {
            node: NodeId::from_index(index as u32),
            value: capacity,
        });
    }
    Ok(())
}

/// Endpoints in range, parameter finite and in range for its kind.
pub(crate) fn validate_edges(node_count: usize, edges: &[Edge]) -> GraphResult<()> {
    for edge in edges {
        for &node in &edge.nodes {
            if node.slot() >= node_count {
                return Err(GraphError::InvalidNodeRef {
                    edge: edge.id,
                    node,
                });
            }
        }
        validate_parameter(edge.id, edge.kind, edge.parameter)?;
    }
    Ok(())
}

pub(crate) fn validate_parameter(edge: EdgeId, kind: EdgeKind, value: Real) -> GraphResult<()> {
    if !value.is_finite() {
        return Err(GraphError::NonFinite {
            what: "edge parameter",
            index: edge.slot(),
            value,
        });
    }
    let reason = match kind {
        EdgeKind::Conduction if value <= 0.0 => Some("thermal resistance must be positive"),
        EdgeKind::Radiation if value < 0.0 => Some("radiation coefficient must be non-negative"),
        _ => None,
    };
    match reason {
        Some(reason) => Err(GraphError::InvalidParameter {
            edge,
            kind,
            value,
            reason,
        }),
        None => Ok(()),
    }
}
