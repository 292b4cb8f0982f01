//! Network-specific error types.

use chill_core::{ChillError, EdgeId, NodeId, Real};
use chill_materials::MaterialError;
use thiserror::Error;

use crate::graph::EdgeKind;

pub type GraphResult<T> = Result<T, GraphError>;

/// Network construction, setup and sequencing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// No node carries the requested name.
    #[error("Node not found: {name:?}")]
    NodeNotFound { name: String },

    /// A handle created by a different network was passed in.
    #[error("Node {node} does not belong to this network")]
    UnownedNode { node: NodeId },

    /// An edge would connect a node to itself.
    #[error("Edge would connect node {node} to itself")]
    SelfLoop { node: NodeId },

    /// An edge refers to a node index outside the node arena.
    #[error("Edge {edge} refers to non-existent node {node}")]
    InvalidNodeRef { edge: EdgeId, node: NodeId },

    /// Capacity is zero, negative, NaN or negative infinity.
    #[error("Node {node} has invalid capacity {value} (must be positive or +inf)")]
    InvalidCapacity { node: NodeId, value: Real },

    /// A value that must be finite is not.
    #[error("Non-finite {what} at index {index}: {value}")]
    NonFinite {
        what: &'static str,
        index: usize,
        value: Real,
    },

    /// An edge parameter is out of range for its kind.
    #[error("Edge {edge} ({kind}) has invalid parameter {value}: {reason}")]
    InvalidParameter {
        edge: EdgeId,
        kind: EdgeKind,
        value: Real,
        reason: &'static str,
    },

    /// The network changed since the last `setup()` (or was never set up).
    #[error("Network is not set up: call setup() after changing nodes or edges")]
    NotCompiled,

    /// Parallel arrays disagree in length.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Material lookup failed while defining an object node.
    #[error(transparent)]
    Material(#[from] MaterialError),
}

impl From<GraphError> for ChillError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::Material(inner) => inner.into(),
            GraphError::NodeNotFound { .. }
            | GraphError::UnownedNode { .. }
            | GraphError::SelfLoop { .. }
            | GraphError::InvalidCapacity { .. }
            | GraphError::InvalidParameter { .. } => ChillError::InvalidArg {
                what: err.to_string(),
            },
            GraphError::NonFinite { what, value, .. } => ChillError::NonFinite { what, value },
            GraphError::InvalidNodeRef { .. }
            | GraphError::NotCompiled
            | GraphError::LengthMismatch { .. } => ChillError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
