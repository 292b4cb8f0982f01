//! Simulation settings.

use chill_core::{Real, ensure_positive};

use crate::error::{SimError, SimResult};

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// Forward Euler (1st-order, 1 rhs call per step).
    #[default]
    ForwardEuler,
    /// 4th-order Runge-Kutta (4 rhs calls per step).
    RK4,
}

/// Options for simulation runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Fixed time step [s]. Stability is the caller's responsibility.
    pub dt: Real,
    /// Integrator type (default: forward Euler)
    pub integrator: IntegratorType,
    /// Largest temperature change [K] any node may see in one step before
    /// the run is aborted; `None` disables the check.
    pub max_step_change: Option<Real>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            integrator: IntegratorType::default(),
            max_step_change: Some(1e8),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        ensure_positive(self.dt, "dt")?;
        if let Some(limit) = self.max_step_change
            && !(limit.is_finite() && limit > 0.0)
        {
            return Err(SimError::InvalidArg {
                what: format!("max_step_change must be positive and finite (got {limit})"),
            });
        }
        Ok(())
    }
}
