//! Resource limits applied to a single search.

use std::time::Duration;

/// Optional wall-clock and step budgets for one call to the solver.
///
/// Both limits are checked once per processed neighbor. `None` means no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limits {
    pub timeout: Option<Duration>,
    pub max_steps: Option<u64>,
}

impl Limits {
    /// No timeout and no step budget.
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout from fractional seconds.
    ///
    /// Positive infinity and NaN leave the search without a timeout. Zero or
    /// negative values give a zero timeout, which aborts on the first
    /// relaxation.
    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout = if secs.is_nan() || secs == f64::INFINITY {
            None
        } else if secs <= 0.0 {
            Some(Duration::ZERO)
        } else {
            Some(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
        };
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.timeout.is_none() && self.max_steps.is_none()
    }

    /// The step budget, if `steps` has gone past it.
    pub(crate) fn exceeded_step_budget(&self, steps: u64) -> Option<u64> {
        self.max_steps.filter(|&max| steps > max)
    }
}
