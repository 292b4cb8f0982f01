//! Heat balance of a compiled thermal network.
//!
//! Each edge contributes a heat flow `q` [W] leaving its `from` node and
//! entering its `to` node. A node's rate of change is its net inflow divided
//! by its capacity; nodes with infinite capacity never change.

use chill_core::Real;
use chill_graph::{CompiledState, EdgeKind};
use tracing::warn;

use crate::config::{IntegratorType, SimConfig};
use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::model::TransientModel;

/// Heat flow [W] from `t_from` to `t_to` through one edge.
#[inline]
pub fn heat_flow(kind: EdgeKind, parameter: Real, t_from: Real, t_to: Real) -> Real {
    match kind {
        EdgeKind::Conduction => (t_from - t_to) / parameter,
        EdgeKind::Radiation => parameter * (t_from.powi(4) - t_to.powi(4)),
        EdgeKind::HeatInput => parameter,
    }
}

/// Transient model over the arrays of a compiled network. State is the
/// temperature vector in node order.
pub struct ThermalModel<'a> {
    compiled: &'a CompiledState,
}

impl<'a> ThermalModel<'a> {
    pub fn new(compiled: &'a CompiledState) -> Self {
        Self { compiled }
    }

    /// Net heat inflow [W] per node at temperatures `x`.
    pub fn net_inflow(&self, x: &[Real]) -> Vec<Real> {
        let mut inflow = vec![0.0; x.len()];
        let edges = self
            .compiled
            .connections()
            .iter()
            .zip(self.compiled.parameters())
            .zip(self.compiled.edge_kinds());
        for ((&[from, to], &parameter), &kind) in edges {
            let q = heat_flow(kind, parameter, x[from], x[to]);
            inflow[from] -= q;
            inflow[to] += q;
        }
        inflow
    }
}

impl TransientModel for ThermalModel<'_> {
    type State = Vec<Real>;

    fn initial_state(&self) -> Self::State {
        self.compiled.temperatures().to_vec()
    }

    fn rhs(&mut self, _t: f64, x: &Self::State) -> SimResult<Self::State> {
        let inflow = self.net_inflow(x);
        Ok(inflow
            .iter()
            .zip(self.compiled.capacities())
            .map(|(&q, &c)| if c == Real::INFINITY { 0.0 } else { q / c })
            .collect())
    }

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State {
        a.iter().zip(b).map(|(x, y)| x + y).collect()
    }

    fn scale(&self, a: &Self::State, scale: f64) -> Self::State {
        a.iter().map(|x| x * scale).collect()
    }
}

/// Advance the compiled temperatures by `steps` steps of `config.dt`.
///
/// Works on a copy: the returned vector is the new temperature array and
/// `compiled` is never modified, so a failed run leaves no trace.
pub fn integrate(compiled: &CompiledState, config: &SimConfig, steps: u64) -> SimResult<Vec<Real>> {
    config.validate()?;
    let mut model = ThermalModel::new(compiled);
    match config.integrator {
        IntegratorType::ForwardEuler => advance(&ForwardEuler, &mut model, config, steps),
        IntegratorType::RK4 => advance(&RK4, &mut model, config, steps),
    }
}

fn advance<I: Integrator>(
    integrator: &I,
    model: &mut ThermalModel<'_>,
    config: &SimConfig,
    steps: u64,
) -> SimResult<Vec<Real>> {
    let mut t = 0.0;
    let mut x = model.initial_state();
    for step in 0..steps {
        let next = integrator.step(model, t, &x, config.dt)?;
        check_step(step, &x, &next, config.max_step_change)?;
        x = next;
        t += config.dt;
    }
    Ok(x)
}

fn check_step(step: u64, before: &[Real], after: &[Real], limit: Option<Real>) -> SimResult<()> {
    for (node, (&old, &new)) in before.iter().zip(after).enumerate() {
        if !new.is_finite() {
            warn!(step, node, "non-finite temperature, aborting run");
            return Err(SimError::NonPhysical {
                what: "temperature became non-finite",
            });
        }
        let change = new - old;
        if let Some(limit) = limit
            && change.abs() > limit
        {
            warn!(step, node, change, limit, "temperature step exceeds limit, aborting run");
            return Err(SimError::Diverged { step, node, change });
        }
    }
    Ok(())
}
