//! End-to-end scenarios for the run controller.

use chill_core::units::constants::{HOUR_S, atm};
use chill_core::units::{cm3, k};
use chill_core::thermal::convection_resistance;
use chill_graph::Network;
use chill_materials::CatalogModel;
use chill_sim::{IntegratorType, SimConfig, SimError, Simulation};

fn config(dt: f64) -> SimConfig {
    SimConfig {
        dt,
        ..SimConfig::default()
    }
}

#[test]
fn three_node_chain_reaches_mean_temperature() {
    // 0.1 m² x 1 cm aluminium plates coupled by h = 100 W/m²K films.
    let area = 0.1;
    let capacity = 2700.0 * area * 0.01 * 900.0;
    let resistance = convection_resistance(100.0, area).unwrap();

    let mut net = Network::new();
    let n0 = net.define_node(500.0, capacity, "");
    let n1 = net.define_node(300.0, capacity, "");
    let n2 = net.define_node(300.0, capacity, "");
    net.define_thermal_conduction(n0, n1, resistance, "").unwrap();
    net.define_thermal_conduction(n1, n2, resistance, "").unwrap();

    let mut sim = Simulation::new(net, config(0.1)).unwrap();
    sim.setup().unwrap();
    sim.execute(10_000.0, 100.0).unwrap();

    assert_eq!(sim.history().len(), 100);
    let temps = sim.temperatures().unwrap();
    assert!((temps[0] - temps[1]).abs() < 1e-3);
    assert!((temps[1] - temps[2]).abs() < 1e-3);

    let mean = (500.0 + 300.0 + 300.0) / 3.0;
    for &t in temps {
        assert!((t - mean).abs() < 1.0, "{t} not within 1 K of {mean}");
    }
}

#[test]
fn history_fidelity() {
    let mut net = Network::new();
    let a = net.define_node(400.0, 50.0, "");
    let b = net.define_node(300.0, 50.0, "");
    net.define_thermal_conduction(a, b, 2.0, "").unwrap();

    let mut sim = Simulation::new(net, config(1.0)).unwrap();
    sim.setup().unwrap();
    sim.execute(100.0, 10.0).unwrap();

    let expected: Vec<f64> = (1..=10).map(|i| 10.0 * i as f64).collect();
    assert_eq!(sim.history().len(), 10);
    assert_eq!(sim.history().temperatures().len(), 10);
    assert_eq!(sim.history().times(), expected.as_slice());
    assert_eq!(sim.time(), 100.0);
}

#[test]
fn execute_drops_partial_final_interval() {
    // 25 s in 10 s intervals: the last 5 s are neither run nor recorded.
    let mut net = Network::new();
    let a = net.define_node(400.0, 50.0, "");
    let b = net.define_node(300.0, 50.0, "");
    net.define_thermal_conduction(a, b, 2.0, "").unwrap();

    let mut sim = Simulation::new(net, config(1.0)).unwrap();
    sim.setup().unwrap();
    sim.execute(25.0, 10.0).unwrap();

    assert_eq!(sim.history().times(), &[10.0, 20.0]);
    assert_eq!(sim.time(), 20.0);
}

#[test]
fn execute_without_recording() {
    let mut net = Network::new();
    net.define_node(300.0, 1.0, "");
    let mut sim = Simulation::new(net, config(1.0)).unwrap();
    sim.setup().unwrap();

    sim.execute(5.0, 0.0).unwrap();
    assert!(sim.history().is_empty());
    assert_eq!(sim.time(), 5.0);

    sim.execute(5.0, 10.0).unwrap();
    assert!(sim.history().is_empty());
    assert_eq!(sim.time(), 10.0);
}

#[test]
fn execute_rejects_interval_below_dt_and_bad_times() {
    let mut net = Network::new();
    net.define_node(300.0, 1.0, "");
    let mut sim = Simulation::new(net, config(1.0)).unwrap();
    sim.setup().unwrap();

    assert!(matches!(
        sim.execute(10.0, 0.5),
        Err(SimError::InvalidArg { .. })
    ));
    assert!(matches!(
        sim.execute(-1.0, 0.0),
        Err(SimError::InvalidArg { .. })
    ));
    assert!(matches!(
        sim.execute(f64::NAN, 1.0),
        Err(SimError::InvalidArg { .. })
    ));
    assert_eq!(sim.time(), 0.0);
}

#[test]
fn topology_change_requires_new_setup() {
    let mut net = Network::new();
    let a = net.define_node(400.0, 10.0, "a");
    let b = net.define_node(300.0, 10.0, "b");
    net.define_thermal_conduction(a, b, 1.0, "").unwrap();

    let mut sim = Simulation::new(net, config(0.1)).unwrap();
    sim.setup().unwrap();
    sim.run(10).unwrap();
    let time = sim.time();

    let c = sim.network_mut().define_node(350.0, 10.0, "c");
    assert_eq!(sim.run(10).unwrap_err(), SimError::NotReady);
    assert_eq!(sim.execute(1.0, 0.1).unwrap_err(), SimError::NotReady);
    assert_eq!(sim.time(), time);

    sim.setup().unwrap();
    sim.run(10).unwrap();

    sim.network_mut()
        .define_thermal_conduction(b, c, 1.0, "")
        .unwrap();
    assert_eq!(sim.run(1).unwrap_err(), SimError::NotReady);
    sim.setup().unwrap();
    assert!(sim.run(1).is_ok());
}

#[test]
fn setup_restarts_from_node_records() {
    // setup() reads the node records, so sync first to continue from the
    // simulated state after a topology change.
    let mut net = Network::new();
    let a = net.define_node(400.0, 10.0, "a");
    let b = net.define_node(300.0, 10.0, "b");
    net.define_thermal_conduction(a, b, 1.0, "").unwrap();
    let mut sim = Simulation::new(net, config(0.1)).unwrap();
    sim.setup().unwrap();
    sim.run(100).unwrap();
    let simulated = sim.temperatures().unwrap().to_vec();

    sim.sync_nodes().unwrap();
    sim.network_mut().define_node(300.0, 10.0, "c");
    sim.setup().unwrap();
    assert_eq!(&sim.temperatures().unwrap()[..2], simulated.as_slice());
}

#[test]
fn two_nodes_converge() {
    let mut net = Network::new();
    let a = net.define_node(1000.0, 20.0, "");
    let b = net.define_node(200.0, 60.0, "");
    net.define_thermal_conduction(a, b, 0.5, "").unwrap();

    let mut sim = Simulation::new(net, config(0.05)).unwrap();
    sim.setup().unwrap();

    let mut gap = f64::INFINITY;
    for _ in 0..10 {
        sim.run(1_000).unwrap();
        let t = sim.temperatures().unwrap();
        let next_gap = (t[0] - t[1]).abs();
        assert!(next_gap <= gap);
        gap = next_gap;
    }
    assert!(gap < 1e-6);
    // Capacity-weighted mean: (20·1000 + 60·200) / 80
    let t = sim.temperatures().unwrap();
    assert!((t[0] - 400.0).abs() < 1e-4);
}

#[test]
fn heater_warms_target_linearly_while_source_stays_fixed() {
    let mut net = Network::new();
    let plate = net.define_node(300.0, 200.0, "plate");
    let (source, _) = net.define_heater(plate, 20.0, "heater").unwrap();

    let mut sim = Simulation::new(net, config(0.5)).unwrap();
    sim.setup().unwrap();
    sim.execute(100.0, 10.0).unwrap();

    // 20 W · 100 s / 200 J/K
    assert!((sim.temperature(plate).unwrap() - 310.0).abs() < 1e-9);
    assert_eq!(sim.temperature(source).unwrap(), 300.0);

    let trajectory = sim.node_trajectory(plate).unwrap();
    assert_eq!(trajectory.len(), 10);
    assert!((trajectory[0].1 - 301.0).abs() < 1e-9);
    assert!(trajectory.windows(2).all(|w| w[1].1 > w[0].1));
}

#[test]
fn radiating_body_cools_toward_fixed_environment() {
    let mut net = Network::new();
    let body = net.define_node(600.0, 500.0, "body");
    let space = net.define_node(300.0, f64::INFINITY, "environment");
    net.define_thermal_radiation(body, space, 5.67e-9, "").unwrap();

    let mut sim = Simulation::new(net, config(1.0)).unwrap();
    sim.setup().unwrap();
    sim.execute(50_000.0, 1_000.0).unwrap();

    let series = sim.node_trajectory(body).unwrap();
    assert!(series.windows(2).all(|w| w[1].1 <= w[0].1));
    let last = series.last().unwrap().1;
    assert!(last >= 300.0 - 1e-9 && last < 310.0, "{last}");
    assert_eq!(sim.temperature(space).unwrap(), 300.0);
}

#[test]
fn three_aluminium_objects_settle_within_an_hour() {
    let model = CatalogModel::new();
    let mut net = Network::new();
    let o0 = net
        .define_object(&model, "Al", k(300.0), atm(), cm3(10.0), "obj.0")
        .unwrap();
    let o1 = net
        .define_object(&model, "Al", k(300.0), atm(), cm3(10.0), "obj.1")
        .unwrap();
    let o2 = net
        .define_object(&model, "Al", k(500.0), atm(), cm3(10.0), "obj.2")
        .unwrap();
    // h = 100 W/m²K over 10 cm²
    let resistance = convection_resistance(100.0, 10.0e-4).unwrap();
    net.define_thermal_conduction(o0, o1, resistance, "").unwrap();
    net.define_thermal_conduction(o1, o2, resistance, "").unwrap();

    let mut sim = Simulation::new(net, config(0.1)).unwrap();
    sim.setup().unwrap();
    sim.execute(HOUR_S, 1.0).unwrap();

    assert_eq!(sim.history().len(), 3600);
    let theory = (300.0 + 300.0 + 500.0) / 3.0;
    let (_, last) = sim.history().latest().unwrap();
    for &t in last {
        assert!((t - theory).abs() < 10.0, "{t}");
    }
}

#[test]
fn divergent_run_leaves_state_untouched() {
    let mut net = Network::new();
    let target = net.define_node(300.0, 1e-3, "tiny");
    net.define_heater(target, 1e6, "blowtorch").unwrap();

    let mut sim = Simulation::new(net, config(1.0)).unwrap();
    sim.setup().unwrap();
    let before = sim.temperatures().unwrap().to_vec();

    assert!(matches!(sim.run(3), Err(SimError::Diverged { .. })));
    assert_eq!(sim.temperatures().unwrap(), before.as_slice());
    assert_eq!(sim.time(), 0.0);
}

#[test]
fn rk4_and_euler_agree_on_slow_dynamics() {
    let build = |integrator: IntegratorType| {
        let mut net = Network::new();
        let a = net.define_node(500.0, 1000.0, "");
        let b = net.define_node(300.0, 1000.0, "");
        net.define_thermal_conduction(a, b, 1.0, "").unwrap();
        let mut sim = Simulation::new(
            net,
            SimConfig {
                dt: 0.1,
                integrator,
                ..SimConfig::default()
            },
        )
        .unwrap();
        sim.setup().unwrap();
        sim.execute(500.0, 0.0).unwrap();
        sim.temperatures().unwrap().to_vec()
    };
    let euler = build(IntegratorType::ForwardEuler);
    let rk4 = build(IntegratorType::RK4);
    for (e, r) in euler.iter().zip(&rk4) {
        assert!((e - r).abs() < 1e-2);
    }
}
