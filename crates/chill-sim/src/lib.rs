//! Transient simulation of thermal networks.
//!
//! Provides:
//! - `ThermalModel`: per-node heat balance over conduction, radiation and heat-input edges
//! - Fixed-step explicit integrators (forward Euler, RK4)
//! - `Simulation`: run controller with clock, recording and history
//!
//! # Example
//!
//! ```
//! use chill_graph::Network;
//! use chill_sim::{SimConfig, Simulation};
//!
//! let mut net = Network::new();
//! let a = net.define_node(500.0, 100.0, "a");
//! let b = net.define_node(300.0, 100.0, "b");
//! net.define_thermal_conduction(a, b, 1.0, "").unwrap();
//!
//! let mut sim = Simulation::new(net, SimConfig { dt: 1.0, ..SimConfig::default() }).unwrap();
//! sim.setup().unwrap();
//! sim.execute(100.0, 10.0).unwrap();
//!
//! assert_eq!(sim.history().len(), 10);
//! assert_eq!(sim.time(), 100.0);
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod integrator;
pub mod model;
pub mod sim;
pub mod thermal;

// Re-exports for public API
pub use config::{IntegratorType, SimConfig};
pub use error::{SimError, SimResult};
pub use history::History;
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::TransientModel;
pub use sim::Simulation;
pub use thermal::{ThermalModel, heat_flow, integrate};
