//! Error types for simulation operations.

use chill_core::{ChillError, Real};
use chill_graph::GraphError;
use thiserror::Error;

/// Errors encountered during transient simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// Running or recording while the network is not set up.
    #[error("Network is not set up: call setup() after changing nodes or edges")]
    NotReady,

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    /// A single step moved a node by more than the configured limit.
    #[error("Run diverged at step {step}: node {node} changed by {change} K")]
    Diverged { step: u64, node: usize, change: Real },

    #[error(transparent)]
    Graph(GraphError),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<GraphError> for SimError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::NotCompiled => SimError::NotReady,
            other => SimError::Graph(other),
        }
    }
}

impl From<ChillError> for SimError {
    fn from(e: ChillError) -> Self {
        SimError::InvalidArg {
            what: e.to_string(),
        }
    }
}
