//! chill-materials: material property lookup for chill.
//!
//! Provides:
//! - A catalog of common engineering materials (metals, glass, polymers, water, gases)
//! - `MaterialModel` trait: density and specific heat at (T, p)
//! - `CatalogModel`: constant-property solids/liquids and ideal-gas gases
//!
//! The simulator itself only consumes the heat capacity [J/K] that a model
//! returns for a given material, temperature, pressure and volume.
//!
//! # Example
//!
//! ```
//! use chill_core::units::{cm3, constants::atm, k};
//! use chill_materials::{CatalogModel, MaterialModel};
//!
//! let model = CatalogModel::new();
//! let c = model.heat_capacity("Al", k(300.0), atm(), cm3(10.0)).unwrap();
//! assert!((c.value - 2700.0 * 897.0 * 1.0e-5).abs() < 1e-9);
//! ```

pub mod catalog;
pub mod catalog_model;
pub mod error;
pub mod model;

// Re-exports for ergonomics
pub use catalog::{
    DensityLaw, MaterialCatalogEntry, Phase, filter_material_catalog, find_material,
    material_catalog,
};
pub use catalog_model::CatalogModel;
pub use error::{MaterialError, MaterialResult};
pub use model::{MaterialModel, MaterialProperties};
