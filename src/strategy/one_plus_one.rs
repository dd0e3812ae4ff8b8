//! (1+1) evolution strategy with adaptive step-size control.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::MejoraError;

use super::{CostFunction, NormalVariateSource, RunReport, SearchState, TerminationReason};

/// Default search-radius growth factor applied on an accepted step.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.05;

/// Blend weight for the symmetric rank-one covariance update on acceptance:
/// `C ← (1 − w)·C + w·(u uᵀ)` with `w = (growth − 1) / growth`. The more
/// aggressively the radius grows on success, the more the shape is pulled
/// toward the successful direction.
fn covariance_blend(growth_factor: f64) -> f64 {
    (growth_factor - 1.0) / growth_factor
}

/// Cloneable handle that requests a stop from another thread.
///
/// The request takes effect at the next iteration boundary; the in-flight
/// step is never aborted.
#[derive(Debug, Clone)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    /// Requests that the running optimization stop.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

/// Single-solution, self-adapting (1+1) evolution strategy optimizer.
///
/// Lifecycle: supply a [`CostFunction`] and a [`NormalVariateSource`], call
/// [`initialize`](Self::initialize) with a positive search radius, then
/// [`start_optimization`](Self::start_optimization), which blocks until the
/// iteration budget is exhausted, the covariance's Frobenius norm falls
/// below epsilon, or a stop is requested. Calling `start_optimization` again
/// resumes from the last committed state.
///
/// Minimizes by default; [`maximize_on`](Self::maximize_on) flips the sense.
///
/// # Example
///
/// ```
/// use mejora::prelude::*;
///
/// let mut es = OnePlusOneEs::new();
/// es.set_cost_function(FnCost::new(1, |x: &[f64]| (x[0] - 2.0).powi(2)));
/// es.set_variate_source(BoxMullerSource::seeded(3));
/// es.set_initial_position(&[0.0]);
/// es.set_maximum_iteration(500);
/// es.initialize(0.5, None, None).unwrap();
/// let report = es.start_optimization().unwrap();
/// assert!((report.solution[0] - 2.0).abs() < 0.1);
/// ```
pub struct OnePlusOneEs {
    max_iteration: u32,
    epsilon: f64,
    maximize: bool,
    growth_factor: f64,
    shrink_factor: f64,
    initial_radius: f64,
    initialized: bool,
    current_iteration: u32,
    stop: Arc<AtomicBool>,
    cost: Option<Box<dyn CostFunction>>,
    variates: Option<Box<dyn NormalVariateSource>>,
    initial_position: Vec<f64>,
    state: Option<SearchState>,
}

impl Default for OnePlusOneEs {
    fn default() -> Self {
        Self {
            max_iteration: 100,
            epsilon: 1e-10,
            maximize: false,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_factor: DEFAULT_GROWTH_FACTOR.powf(-0.25),
            initial_radius: 1.0,
            initialized: false,
            current_iteration: 0,
            stop: Arc::new(AtomicBool::new(false)),
            cost: None,
            variates: None,
            initial_position: Vec::new(),
            state: None,
        }
    }
}

impl OnePlusOneEs {
    /// Creates an optimizer with default configuration (minimize,
    /// 100 iterations, epsilon 1e-10).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cost function to optimize.
    pub fn set_cost_function(&mut self, cost: impl CostFunction + 'static) {
        self.cost = Some(Box::new(cost));
    }

    /// Sets the standard-normal variate source driving perturbations.
    pub fn set_variate_source(&mut self, source: impl NormalVariateSource + 'static) {
        self.variates = Some(Box::new(source));
    }

    /// Sets the start position for the first run. Copied; later runs resume
    /// from the last committed position instead.
    pub fn set_initial_position(&mut self, position: &[f64]) {
        self.initial_position = position.to_vec();
    }

    /// Sets the convergence tolerance on the covariance's Frobenius norm.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    /// Sets the total iteration budget (across resumed runs).
    pub fn set_maximum_iteration(&mut self, max_iteration: u32) {
        self.max_iteration = max_iteration;
    }

    /// Switches to maximization. One-way; the default sense is minimize.
    pub fn maximize_on(&mut self) {
        self.maximize = true;
    }

    /// Cost of the last committed position, if any run has started.
    #[must_use]
    pub fn current_cost(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.cost)
    }

    /// Last committed position, if any run has started.
    #[must_use]
    pub fn current_position(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.position.as_slice())
    }

    /// Committed iterations so far, across all runs.
    #[must_use]
    pub fn current_iteration(&self) -> u32 {
        self.current_iteration
    }

    /// Search-radius growth factor applied on acceptance.
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Search-radius shrink factor applied on rejection.
    #[must_use]
    pub fn shrink_factor(&self) -> f64 {
        self.shrink_factor
    }

    /// Current search radius, if any run has started.
    #[must_use]
    pub fn current_radius(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.radius)
    }

    /// Search radius the next fresh run starts from.
    #[must_use]
    pub fn initial_radius(&self) -> f64 {
        self.initial_radius
    }

    /// Convergence tolerance on the covariance's Frobenius norm.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Handle for requesting a stop from another thread while
    /// [`start_optimization`](Self::start_optimization) blocks.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            flag: Arc::clone(&self.stop),
        }
    }

    /// Requests that the running optimization stop at the next iteration
    /// boundary. Reset on every `start_optimization` entry.
    pub fn stop_optimization(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Prepares the optimizer: search radius, growth and shrink factors.
    ///
    /// `None` factors select the classical 1/5-success-rule defaults
    /// (growth 1.05, shrink `growth^(-1/4)`). Re-initializing discards any
    /// previous search state and iteration count, restarting the search;
    /// cost function, variate source, and the other configuration fields
    /// are kept.
    ///
    /// # Errors
    ///
    /// [`MejoraError::InvalidParameter`] if `initial_radius` is not a
    /// positive finite number, an explicit growth factor is not > 1, or an
    /// explicit shrink factor is not in (0, 1).
    pub fn initialize(
        &mut self,
        initial_radius: f64,
        growth: Option<f64>,
        shrink: Option<f64>,
    ) -> Result<(), MejoraError> {
        if !initial_radius.is_finite() || initial_radius <= 0.0 {
            return Err(MejoraError::invalid_parameter(
                "initial_radius",
                initial_radius,
                "> 0",
            ));
        }
        let growth_factor = match growth {
            Some(g) if !g.is_finite() || g <= 1.0 => {
                return Err(MejoraError::invalid_parameter("growth", g, "> 1"));
            }
            Some(g) => g,
            None => DEFAULT_GROWTH_FACTOR,
        };
        let shrink_factor = match shrink {
            Some(s) if !s.is_finite() || s <= 0.0 || s >= 1.0 => {
                return Err(MejoraError::invalid_parameter("shrink", s, "in (0, 1)"));
            }
            Some(s) => s,
            None => growth_factor.powf(-0.25),
        };

        self.initial_radius = initial_radius;
        self.growth_factor = growth_factor;
        self.shrink_factor = shrink_factor;
        self.state = None;
        self.current_iteration = 0;
        self.initialized = true;
        Ok(())
    }

    /// Runs the adaptive search until a termination condition fires.
    ///
    /// Blocks the calling thread. Clears any pending stop request on entry,
    /// then loops: at each iteration boundary (including before the first
    /// step) it checks, in order, the iteration budget, the Frobenius-norm
    /// convergence test, and the stop flag; otherwise it performs one
    /// perturb-evaluate-accept step. The first call evaluates the initial
    /// position; later calls resume from the last committed state.
    ///
    /// # Errors
    ///
    /// - [`MejoraError::NotInitialized`] if [`initialize`](Self::initialize)
    ///   has not succeeded or cost function / variate source is unset; no
    ///   side effects in that case.
    /// - [`MejoraError::DimensionMismatch`] if a parameter vector's length
    ///   disagrees with the cost function's declared dimensionality; fatal,
    ///   aborts the run mid-iteration.
    pub fn start_optimization(&mut self) -> Result<RunReport, MejoraError> {
        if !self.initialized {
            return Err(MejoraError::not_initialized("optimizer (initialize)"));
        }
        let cost = self
            .cost
            .as_deref()
            .ok_or_else(|| MejoraError::not_initialized("cost function"))?;
        let variates = self
            .variates
            .as_deref_mut()
            .ok_or_else(|| MejoraError::not_initialized("normal variate source"))?;

        self.stop.store(false, Ordering::Relaxed);

        // Taken out for the duration of the run and written back on every
        // exit path that committed state.
        let mut state = match self.state.take() {
            Some(state) => state,
            None => {
                let expected = cost.dimension();
                if self.initial_position.len() != expected {
                    return Err(MejoraError::dimension_mismatch(
                        expected,
                        self.initial_position.len(),
                    ));
                }
                let position = self.initial_position.clone();
                let initial_cost = cost.evaluate(&position);
                SearchState::new(position, initial_cost, self.initial_radius)
            }
        };

        let dim = state.position.len();
        let blend = covariance_blend(self.growth_factor);
        let mut accepted = 0u32;

        let termination = loop {
            if self.current_iteration >= self.max_iteration {
                break TerminationReason::IterationLimitReached;
            }
            if state.covariance.frobenius_norm() < self.epsilon {
                break TerminationReason::Converged;
            }
            if self.stop.load(Ordering::Relaxed) {
                break TerminationReason::StoppedByRequest;
            }

            // One perturb-evaluate-accept step.
            let z: Vec<f64> = (0..dim).map(|_| variates.sample()).collect();
            let shaped = state.covariance.transform(&z);
            let candidate: Vec<f64> = state
                .position
                .iter()
                .zip(&shaped)
                .map(|(p, d)| p + state.radius * d)
                .collect();

            if candidate.len() != cost.dimension() {
                let expected = cost.dimension();
                let actual = candidate.len();
                self.state = Some(state);
                return Err(MejoraError::dimension_mismatch(expected, actual));
            }
            let candidate_cost = cost.evaluate(&candidate);

            let improved = if self.maximize {
                candidate_cost > state.cost
            } else {
                candidate_cost < state.cost
            };

            if improved {
                let delta: Vec<f64> = shaped.iter().map(|d| d * state.radius).collect();
                state.position = candidate;
                state.cost = candidate_cost;
                state.radius *= self.growth_factor;
                state.covariance.blend_rank_one(blend, &delta);
                accepted += 1;
            } else {
                state.radius *= self.shrink_factor;
            }
            self.current_iteration += 1;
        };

        let report = RunReport {
            solution: state.position.clone(),
            cost: state.cost,
            iterations: self.current_iteration,
            accepted,
            termination,
        };
        self.state = Some(state);
        Ok(report)
    }
}

impl fmt::Debug for OnePlusOneEs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnePlusOneEs")
            .field("max_iteration", &self.max_iteration)
            .field("epsilon", &self.epsilon)
            .field("maximize", &self.maximize)
            .field("growth_factor", &self.growth_factor)
            .field("shrink_factor", &self.shrink_factor)
            .field("initial_radius", &self.initial_radius)
            .field("initialized", &self.initialized)
            .field("current_iteration", &self.current_iteration)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "one_plus_one_tests.rs"]
mod tests;
