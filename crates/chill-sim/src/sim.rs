//! Run controller: clock, stepping, recording.

use chill_core::{Real, whole_steps};
use chill_graph::{GraphError, Network, NodeHandle};
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::history::History;
use crate::thermal::{heat_flow, integrate};

/// A network together with its simulation clock and recorded history.
///
/// Runs are valid only while the network is set up; any change made through
/// `network_mut` that touches nodes or edges requires another `setup()`.
#[derive(Debug, Clone)]
pub struct Simulation {
    network: Network,
    config: SimConfig,
    time: Real,
    history: History,
}

impl Simulation {
    pub fn new(network: Network, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            network,
            config,
            time: 0.0,
            history: History::new(),
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn dt(&self) -> Real {
        self.config.dt
    }

    /// Simulation clock [s]
    pub fn time(&self) -> Real {
        self.time
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_ready(&self) -> bool {
        self.network.is_ready()
    }

    /// Compile the network. Required before `run`, `record` and `execute`.
    pub fn setup(&mut self) -> SimResult<()> {
        self.network.setup()?;
        Ok(())
    }

    /// Advance by `steps` steps of `dt` and move the clock by `steps * dt`.
    ///
    /// Fails with `NotReady` if the network is not set up. On any failure
    /// neither temperatures nor clock change.
    pub fn run(&mut self, steps: u64) -> SimResult<()> {
        let compiled = self.network.compiled()?;
        let next = integrate(compiled, &self.config, steps)?;
        self.network.compiled_mut()?.set_temperatures(next)?;
        self.time += self.config.dt * steps as Real;
        debug!(steps, dt = self.config.dt, time = self.time, "run complete");
        Ok(())
    }

    /// Append a copy of the current temperatures and clock to the history.
    pub fn record(&mut self) -> SimResult<()> {
        let compiled = self.network.compiled()?;
        self.history.push(self.time, compiled.temperatures());
        Ok(())
    }

    /// Run for `total_time` seconds, recording every `record_interval` seconds.
    ///
    /// A `record_interval` of zero, or longer than `total_time`, runs the
    /// whole duration at once without recording. Otherwise the run is split
    /// into `floor(total/dt) / floor(interval/dt)` whole intervals, each
    /// followed by a `record()`. Time left over after the last whole interval
    /// is not simulated.
    pub fn execute(&mut self, total_time: Real, record_interval: Real) -> SimResult<()> {
        if !total_time.is_finite() || total_time < 0.0 {
            return Err(SimError::InvalidArg {
                what: format!("total_time must be finite and non-negative (got {total_time})"),
            });
        }
        if !record_interval.is_finite() || record_interval < 0.0 {
            return Err(SimError::InvalidArg {
                what: format!(
                    "record_interval must be finite and non-negative (got {record_interval})"
                ),
            });
        }
        self.network.compiled()?;

        let dt = self.config.dt;
        let total_steps = whole_steps(total_time, dt);
        if record_interval == 0.0 || record_interval > total_time {
            info!(total_time, total_steps, "executing without recording");
            return self.run(total_steps);
        }

        let interval_steps = whole_steps(record_interval, dt);
        if interval_steps == 0 {
            return Err(SimError::InvalidArg {
                what: format!("record_interval {record_interval} is shorter than dt {dt}"),
            });
        }
        let intervals = total_steps / interval_steps;
        let dropped = total_steps % interval_steps;
        if dropped > 0 {
            warn!(
                dropped_steps = dropped,
                dropped_time = dropped as Real * dt,
                "trailing partial record interval skipped"
            );
        }

        info!(total_time, record_interval, intervals, interval_steps, "executing");
        for _ in 0..intervals {
            self.run(interval_steps)?;
            self.record()?;
        }
        info!(time = self.time, records = self.history.len(), "execute finished");
        Ok(())
    }

    /// Current compiled temperatures in node order.
    pub fn temperatures(&self) -> SimResult<&[Real]> {
        Ok(self.network.compiled()?.temperatures())
    }

    pub fn temperature(&self, node: NodeHandle) -> SimResult<Real> {
        self.network.node(node)?;
        let temps = self.temperatures()?;
        temps.get(node.index()).copied().ok_or(SimError::NotReady)
    }

    /// Heat flow [W] through every edge at the current temperatures.
    pub fn edge_heat_flows(&self) -> SimResult<Vec<Real>> {
        let compiled = self.network.compiled()?;
        let temps = compiled.temperatures();
        Ok(compiled
            .connections()
            .iter()
            .zip(compiled.parameters())
            .zip(compiled.edge_kinds())
            .map(|((&[from, to], &parameter), &kind)| {
                heat_flow(kind, parameter, temps[from], temps[to])
            })
            .collect())
    }

    /// Recorded `(time, temperature)` pairs of one node.
    pub fn node_trajectory(&self, node: NodeHandle) -> SimResult<Vec<(Real, Real)>> {
        self.network.node(node)?;
        Ok(self.history.node_series(node.index()))
    }

    /// Copy the current compiled temperatures into the node records.
    pub fn sync_nodes(&mut self) -> SimResult<()> {
        let temps = self.network.compiled()?.temperatures().to_vec();
        self.network.write_back_temperatures(&temps)?;
        Ok(())
    }

    /// Copy the latest recorded snapshot into the node records.
    ///
    /// Returns `false` when nothing has been recorded yet.
    pub fn refresh_nodes_from_history(&mut self) -> SimResult<bool> {
        let Some((_, temps)) = self.history.latest() else {
            return Ok(false);
        };
        let temps = temps.to_vec();
        match self.network.write_back_temperatures(&temps) {
            Ok(()) => Ok(true),
            Err(GraphError::LengthMismatch { .. }) => Err(SimError::InvalidArg {
                what: "latest snapshot does not match the current node count".to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
