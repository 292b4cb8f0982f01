//! Recorded temperature history.

use chill_core::Real;

/// Append-only record of temperature snapshots and the clock at each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    times: Vec<Real>,
    temperatures: Vec<Vec<Real>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `temperatures` taken at `time`.
    pub fn push(&mut self, time: Real, temperatures: &[Real]) {
        self.times.push(time);
        self.temperatures.push(temperatures.to_vec());
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Clock value of each snapshot [s]
    pub fn times(&self) -> &[Real] {
        &self.times
    }

    /// One temperature array per snapshot, index-aligned with `times()`.
    pub fn temperatures(&self) -> &[Vec<Real>] {
        &self.temperatures
    }

    pub fn latest(&self) -> Option<(Real, &[Real])> {
        let t = *self.times.last()?;
        let temps = self.temperatures.last()?;
        Some((t, temps.as_slice()))
    }

    /// `(time, temperature)` of node `index` across the snapshots that contain it.
    ///
    /// Snapshots recorded before the node existed are skipped.
    pub fn node_series(&self, index: usize) -> Vec<(Real, Real)> {
        self.times
            .iter()
            .zip(&self.temperatures)
            .filter_map(|(&t, temps)| temps.get(index).map(|&temp| (t, temp)))
            .collect()
    }
}
