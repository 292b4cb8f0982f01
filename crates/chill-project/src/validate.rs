//! Network document validation.

use crate::schema::{CapacityDef, EdgeDef, EdgeKindDef, HeaterDef, NetworkDef, NodeDef, SettingsDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network_def(def: &NetworkDef) -> Result<(), ValidationError> {
    if def.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    validate_settings(&def.settings)?;

    let mut node_ids = HashSet::new();
    for node in &def.nodes {
        if node.id.is_empty() {
            return Err(invalid("node id", "\"\"", "must not be empty"));
        }
        if !node_ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: "nodes".to_string(),
            });
        }
        validate_node(node)?;
    }

    // Heaters become edges, so both share one id space.
    let mut edge_ids = HashSet::new();
    for edge in &def.edges {
        if !edge_ids.insert(edge.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: edge.id.clone(),
                context: "edges".to_string(),
            });
        }
        validate_edge(edge, &node_ids)?;
    }

    for heater in &def.heaters {
        if !edge_ids.insert(heater.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: heater.id.clone(),
                context: "heaters".to_string(),
            });
        }
        validate_heater(heater, &node_ids)?;
    }

    Ok(())
}

fn validate_settings(settings: &SettingsDef) -> Result<(), ValidationError> {
    if !settings.dt_s.is_finite() || settings.dt_s <= 0.0 {
        return Err(invalid(
            "settings.dt_s",
            settings.dt_s,
            "must be finite and positive",
        ));
    }
    if let Some(limit) = settings.max_step_change_k
        && (!limit.is_finite() || limit <= 0.0)
    {
        return Err(invalid(
            "settings.max_step_change_k",
            limit,
            "must be finite and positive",
        ));
    }
    Ok(())
}

fn validate_node(node: &NodeDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("node '{}' {name}", node.id);

    if !node.temperature_k.is_finite() {
        return Err(invalid(&field("temperature_k"), node.temperature_k, "must be finite"));
    }

    match &node.capacity {
        CapacityDef::Fixed { j_per_k } => {
            if !j_per_k.is_finite() || *j_per_k <= 0.0 {
                return Err(invalid(
                    &field("capacity.j_per_k"),
                    j_per_k,
                    "must be finite and positive (use Infinite for a reservoir)",
                ));
            }
        }
        CapacityDef::Infinite => {}
        CapacityDef::Material {
            material,
            volume_m3,
            pressure_pa,
        } => {
            if material.trim().is_empty() {
                return Err(invalid(&field("capacity.material"), "\"\"", "must not be empty"));
            }
            if !volume_m3.is_finite() || *volume_m3 <= 0.0 {
                return Err(invalid(
                    &field("capacity.volume_m3"),
                    volume_m3,
                    "must be finite and positive",
                ));
            }
            if !pressure_pa.is_finite() || *pressure_pa <= 0.0 {
                return Err(invalid(
                    &field("capacity.pressure_pa"),
                    pressure_pa,
                    "must be finite and positive",
                ));
            }
        }
    }
    Ok(())
}

fn validate_edge(edge: &EdgeDef, node_ids: &HashSet<&str>) -> Result<(), ValidationError> {
    for endpoint in [&edge.from, &edge.to] {
        if !node_ids.contains(endpoint.as_str()) {
            return Err(ValidationError::MissingReference {
                id: endpoint.clone(),
                context: format!("edge '{}'", edge.id),
            });
        }
    }
    if edge.from == edge.to {
        return Err(invalid(
            &format!("edge '{}' to", edge.id),
            &edge.to,
            "must differ from the source node",
        ));
    }

    let field = |name: &str| format!("edge '{}' {name}", edge.id);
    match edge.kind {
        EdgeKindDef::Conduction { resistance_k_per_w } => {
            if !resistance_k_per_w.is_finite() || resistance_k_per_w <= 0.0 {
                return Err(invalid(
                    &field("resistance_k_per_w"),
                    resistance_k_per_w,
                    "must be finite and positive",
                ));
            }
        }
        EdgeKindDef::Radiation {
            coefficient_w_per_k4,
        } => {
            if !coefficient_w_per_k4.is_finite() || coefficient_w_per_k4 < 0.0 {
                return Err(invalid(
                    &field("coefficient_w_per_k4"),
                    coefficient_w_per_k4,
                    "must be finite and non-negative",
                ));
            }
        }
        EdgeKindDef::HeatInput { power_w } => {
            if !power_w.is_finite() {
                return Err(invalid(&field("power_w"), power_w, "must be finite"));
            }
        }
    }
    Ok(())
}

fn validate_heater(heater: &HeaterDef, node_ids: &HashSet<&str>) -> Result<(), ValidationError> {
    if !node_ids.contains(heater.target.as_str()) {
        return Err(ValidationError::MissingReference {
            id: heater.target.clone(),
            context: format!("heater '{}'", heater.id),
        });
    }
    let source = format!("{}.source", heater.id);
    if node_ids.contains(source.as_str()) {
        return Err(ValidationError::DuplicateId {
            id: source,
            context: format!("heater '{}' source node", heater.id),
        });
    }
    if !heater.power_w.is_finite() {
        return Err(invalid(
            &format!("heater '{}' power_w", heater.id),
            heater.power_w,
            "must be finite",
        ));
    }
    Ok(())
}

fn invalid(field: &str, value: impl std::fmt::Display, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;

    fn node(id: &str, capacity: CapacityDef) -> NodeDef {
        NodeDef {
            id: id.to_string(),
            temperature_k: 300.0,
            capacity,
        }
    }

    fn conduction(id: &str, from: &str, to: &str, r: f64) -> EdgeDef {
        EdgeDef {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            kind: EdgeKindDef::Conduction {
                resistance_k_per_w: r,
            },
        }
    }

    fn base() -> NetworkDef {
        NetworkDef {
            version: 1,
            name: "test".to_string(),
            settings: SettingsDef::default(),
            nodes: vec![
                node("a", CapacityDef::Fixed { j_per_k: 10.0 }),
                node("b", CapacityDef::Infinite),
            ],
            edges: vec![conduction("e1", "a", "b", 1.0)],
            heaters: vec![],
        }
    }

    #[test]
    fn accepts_valid_document() {
        validate_network_def(&base()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut def = base();
        def.version = 2;
        assert_eq!(
            validate_network_def(&def),
            Err(ValidationError::UnsupportedVersion { version: 2 })
        );
    }

    #[test]
    fn rejects_duplicate_node_ids() {
        let mut def = base();
        def.nodes.push(node("a", CapacityDef::Infinite));
        assert!(matches!(
            validate_network_def(&def),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn heaters_share_edge_id_space() {
        let mut def = base();
        def.heaters.push(HeaterDef {
            id: "e1".to_string(),
            target: "a".to_string(),
            power_w: 1.0,
        });
        assert!(matches!(
            validate_network_def(&def),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn rejects_dangling_references() {
        let mut def = base();
        def.edges.push(conduction("e2", "a", "ghost", 1.0));
        assert_eq!(
            validate_network_def(&def),
            Err(ValidationError::MissingReference {
                id: "ghost".to_string(),
                context: "edge 'e2'".to_string(),
            })
        );

        let mut def = base();
        def.heaters.push(HeaterDef {
            id: "h".to_string(),
            target: "ghost".to_string(),
            power_w: 1.0,
        });
        assert!(matches!(
            validate_network_def(&def),
            Err(ValidationError::MissingReference { .. })
        ));
    }

    #[test]
    fn rejects_bad_numbers() {
        let mut def = base();
        def.settings.dt_s = 0.0;
        assert!(validate_network_def(&def).is_err());

        let mut def = base();
        def.nodes[0].temperature_k = f64::NAN;
        assert!(validate_network_def(&def).is_err());

        let mut def = base();
        def.nodes[0].capacity = CapacityDef::Fixed { j_per_k: 0.0 };
        assert!(validate_network_def(&def).is_err());

        let mut def = base();
        def.edges[0] = conduction("e1", "a", "b", 0.0);
        assert!(validate_network_def(&def).is_err());

        let mut def = base();
        def.edges[0].kind = EdgeKindDef::Radiation {
            coefficient_w_per_k4: -1.0,
        };
        assert!(validate_network_def(&def).is_err());
    }

    #[test]
    fn rejects_self_loop() {
        let mut def = base();
        def.edges[0] = conduction("e1", "a", "a", 1.0);
        assert!(matches!(
            validate_network_def(&def),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}
