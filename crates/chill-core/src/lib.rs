//! chill-core: stable foundation for the chill thermal network simulator.
//!
//! Contains:
//! - units (uom SI types, constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact arena IDs for nodes and edges)
//! - thermal (resistance / radiation coefficient helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod thermal;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ChillError, ChillResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
