//! chill-graph: thermal network model for chill.
//!
//! Provides:
//! - Core data structures (Node, Edge, EdgeKind)
//! - `Network`: incremental builder with name lookup and typed edge constructors
//! - `CompiledState`: flat parallel arrays consumed by the integrator
//! - Setup-time validation of capacities and edge parameters
//!
//! # Example
//!
//! ```
//! use chill_graph::Network;
//!
//! let mut net = Network::new();
//! let hot = net.define_node(500.0, 2430.0, "hot");
//! let cold = net.define_node(300.0, 2430.0, "cold");
//! net.define_thermal_conduction(hot, cold, 0.1, "plate").unwrap();
//! net.setup().unwrap();
//!
//! let compiled = net.compiled().unwrap();
//! assert_eq!(compiled.temperatures(), &[500.0, 300.0]);
//! assert_eq!(compiled.connections(), &[[0, 1]]);
//! ```

pub mod compiled;
pub mod error;
pub mod graph;
pub mod network;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use compiled::CompiledState;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeKind, Node, NodeHandle};
pub use network::{Network, NetworkState};
