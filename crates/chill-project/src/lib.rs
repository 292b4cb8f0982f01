//! chill-project: network document format, validation and loading.
//!
//! A [`NetworkDef`] describes nodes, edges, heaters and run settings. It can
//! be stored as YAML or JSON and turned into a ready-to-run
//! [`chill_sim::Simulation`] with [`build_simulation`].

pub mod build;
pub mod schema;
pub mod validate;

pub use build::{build_network, build_simulation, sim_config};
pub use schema::*;
pub use validate::{ValidationError, validate_network_def};

/// Newest document version this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Graph(#[from] chill_graph::GraphError),

    #[error("Simulation error: {0}")]
    Sim(#[from] chill_sim::SimError),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_yaml::from_str(&content)?;
    validate_network_def(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &std::path::Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_network_def(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_json::from_str(&content)?;
    validate_network_def(&def)?;
    Ok(def)
}

pub fn save_json(path: &std::path::Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_network_def(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}
