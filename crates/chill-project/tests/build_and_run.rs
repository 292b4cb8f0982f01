use chill_materials::CatalogModel;
use chill_project::schema::*;
use chill_project::{build_simulation, load_yaml};

const ROOM_HEATER: &str = r#"
version: 1
name: Heated block in a room
settings:
  dt_s: 1.0
  integrator: ForwardEuler
nodes:
  - id: block
    temperature_k: 293.15
    capacity:
      type: Fixed
      j_per_k: 100.0
  - id: room
    temperature_k: 293.15
    capacity:
      type: Infinite
edges:
  - id: film
    from: block
    to: room
    kind:
      type: Conduction
      resistance_k_per_w: 2.0
heaters:
  - id: coil
    target: block
    power_w: 5.0
"#;

#[test]
fn heated_block_settles_at_power_times_resistance() {
    let path = std::env::temp_dir().join("chill_project_room_heater.yaml");
    std::fs::write(&path, ROOM_HEATER).unwrap();
    let def = load_yaml(&path).unwrap();
    assert_eq!(def.settings.integrator, IntegratorDef::ForwardEuler);

    let mut sim = build_simulation(&def, &CatalogModel::new()).unwrap();
    // τ = R·C = 200 s
    sim.execute(4_000.0, 100.0).unwrap();
    assert_eq!(sim.history().len(), 40);

    let block = sim.network().find_node("block").unwrap();
    let room = sim.network().find_node("room").unwrap();
    let steady = 293.15 + 5.0 * 2.0;
    assert!((sim.temperature(block).unwrap() - steady).abs() < 1e-3);
    assert_eq!(sim.temperature(room).unwrap(), 293.15);

    let flows = sim.edge_heat_flows().unwrap();
    assert!((flows[0] - 5.0).abs() < 1e-3);
    assert_eq!(flows[1], 5.0);
}

#[test]
fn material_nodes_use_catalog_capacity() {
    let def = NetworkDef {
        version: 1,
        name: "copper".to_string(),
        settings: SettingsDef::default(),
        nodes: vec![NodeDef {
            id: "slab".to_string(),
            temperature_k: 300.0,
            capacity: CapacityDef::Material {
                material: "copper".to_string(),
                volume_m3: 1e-3,
                pressure_pa: 101_325.0,
            },
        }],
        edges: vec![],
        heaters: vec![],
    };
    let sim = build_simulation(&def, &CatalogModel::new()).unwrap();
    let slab = sim.network().find_node("slab").unwrap();
    let capacity = sim.network().node(slab).unwrap().capacity;
    // Copper: ~8960 kg/m³ · ~385 J/(kg·K) · 1 L
    assert!(capacity > 3000.0 && capacity < 4000.0, "{capacity}");
}
