//! Per lab context objects, each groups the mutable state a host frame loop
//! drives so nothing lives in global state.

use rand::{Rng, rngs::ThreadRng};
use ndarray::Array2;
use crate::error::NeuronLabsError;
use crate::integrator::integrate_trajectory;
use crate::neuron::{
    history::{GhostTrace, SimulationSample, TraceHistory},
    integrate_and_fire::{LifParams, LifStepResult, step_lif},
};
use crate::phase_plane::{Derivative, FlowVector, ModelVariant, State, ViewBounds, sample_flow_field, evaluate_field};
use crate::point_process::{
    PointProcess,
    bernoulli::{BernoulliParams, BernoulliSimulator, BernoulliStats},
    poisson::{PoissonParams, PoissonSimulator, PoissonStats},
};


/// State of a running integrate and fire lab
#[derive(Debug, Clone)]
pub struct LifSession<R: Rng = ThreadRng> {
    params: LifParams,
    voltage: f32,
    steps: u64,
    clock_origin: f64,
    clock_dt: f32,
    history: TraceHistory,
    ghost: Option<GhostTrace>,
    running: bool,
    rng: R,
}

impl LifSession<ThreadRng> {
    /// Returns a running session with default parameters and history capacity
    pub fn default_impl() -> Self {
        let params = LifParams::default();

        LifSession {
            params,
            voltage: params.e_l,
            steps: 0,
            clock_origin: 0.,
            clock_dt: params.dt,
            history: TraceHistory::default(),
            ghost: None,
            running: true,
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> LifSession<R> {
    /// Creates a running session at rest with the given history capacity
    pub fn with_rng(params: LifParams, capacity: usize, rng: R) -> Result<Self, NeuronLabsError> {
        Ok(LifSession {
            params,
            voltage: params.e_l,
            steps: 0,
            clock_origin: 0.,
            clock_dt: params.dt,
            history: TraceHistory::new(capacity)?,
            ghost: None,
            running: true,
            rng,
        })
    }

    /// Steps the neuron once and records the sample, nothing happens while paused
    pub fn step(&mut self) -> Option<LifStepResult> {
        if !self.running {
            return None;
        }

        if self.params.dt != self.clock_dt {
            self.rebase_clock();
        }

        let mut result = step_lif(self.voltage, self.time(), &self.params, &mut self.rng);
        self.steps += 1;
        result.time = self.time();
        self.voltage = result.voltage;
        self.history.push(SimulationSample::from(&result));

        if result.spiked {
            tracing::trace!(time = result.time, "spike");
        }

        Some(result)
    }

    /// Steps the neuron up to `steps` times (one frame's worth), returns the
    /// number of spikes that occurred
    pub fn advance(&mut self, steps: usize) -> usize {
        (0..steps)
            .filter_map(|_| self.step())
            .filter(|i| i.spiked)
            .count()
    }

    /// Freezes the current history as the ghost trace, replacing any previous one
    pub fn capture_ghost(&mut self) -> &GhostTrace {
        tracing::debug!(samples = self.history.len(), "ghost trace captured");

        self.ghost.insert(self.history.snapshot())
    }

    /// Discards the ghost trace
    pub fn clear_ghost(&mut self) {
        if self.ghost.take().is_some() {
            tracing::debug!("ghost trace cleared");
        }
    }

    /// Returns the neuron to rest at time `0` and clears history and ghost trace
    pub fn reset(&mut self) {
        self.voltage = self.params.e_l;
        self.steps = 0;
        self.clock_origin = 0.;
        self.clock_dt = self.params.dt;
        self.history.clear();
        self.ghost = None;

        tracing::debug!("integrate and fire session reset");
    }

    /// Replaces the parameters, voltage and history are left untouched
    pub fn set_params(&mut self, params: LifParams) {
        self.params = params;
    }

    /// Mutable access for field by field parameter edits
    pub fn params_mut(&mut self) -> &mut LifParams {
        &mut self.params
    }

    pub fn params(&self) -> &LifParams {
        &self.params
    }

    pub fn play(&mut self) {
        if !self.running {
            tracing::debug!("integrate and fire session resumed");
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        if self.running {
            tracing::debug!("integrate and fire session paused");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn voltage(&self) -> f32 {
        self.voltage
    }

    /// Simulated time in ms, derived from the step count since the last `dt` change
    /// so rounding does not accumulate over long runs
    pub fn time(&self) -> f32 {
        (self.clock_origin + self.steps as f64 * self.clock_dt as f64) as f32
    }

    fn rebase_clock(&mut self) {
        self.clock_origin += self.steps as f64 * self.clock_dt as f64;
        self.steps = 0;
        self.clock_dt = self.params.dt;
    }

    pub fn history(&self) -> &TraceHistory {
        &self.history
    }

    pub fn ghost(&self) -> Option<&GhostTrace> {
        self.ghost.as_ref()
    }
}

/// State of a phase plane lab
#[derive(Debug, Clone, PartialEq)]
pub struct PhasePlaneSession {
    /// Selected dynamical system
    pub variant: ModelVariant,
    /// Control input passed to the field
    pub control: f32,
    /// Integration step used for probing trajectories
    pub dt: f32,
    /// Visible region, traced trajectories stop once they leave it
    pub bounds: ViewBounds,
}

impl Default for PhasePlaneSession {
    fn default() -> Self {
        PhasePlaneSession {
            variant: ModelVariant::default(),
            control: 0.5,
            dt: 0.05,
            bounds: ViewBounds::default(),
        }
    }
}

impl PhasePlaneSession {
    /// Derivative at the given state
    pub fn field_at(&self, state: State) -> Derivative {
        evaluate_field(state, self.control, &self.variant)
    }

    /// Traces the trajectory from `start` (for example the hovered point) until
    /// it leaves the visible bounds or `max_steps` steps have been taken
    pub fn trace_from(&self, start: State, max_steps: usize) -> Vec<State> {
        let bounds = self.bounds;

        integrate_trajectory(
            start, self.control, &self.variant, self.dt, max_steps, |state| bounds.contains(state),
        ).collect()
    }

    /// Evaluates the field on a grid covering the visible bounds
    pub fn flow_field(&self, rows: usize, cols: usize) -> Array2<FlowVector> {
        sample_flow_field(&self.variant, self.control, &self.bounds, rows, cols)
    }
}

/// Coin flip lab, tracks the lab clock alongside the simulator
#[derive(Debug, Clone)]
pub struct BernoulliLab<R: Rng = ThreadRng> {
    simulator: BernoulliSimulator<R>,
    elapsed: f32,
}

impl BernoulliLab<ThreadRng> {
    pub fn default_impl() -> Self {
        BernoulliLab { simulator: BernoulliSimulator::default_impl(), elapsed: 0. }
    }
}

impl<R: Rng> BernoulliLab<R> {
    pub fn with_rng(params: BernoulliParams, rng: R) -> Result<Self, NeuronLabsError> {
        Ok(BernoulliLab { simulator: BernoulliSimulator::with_rng(params, rng)?, elapsed: 0. })
    }

    /// Advances the lab by `dt_seconds` with success probability `p`
    pub fn tick_bernoulli(&mut self, p: f32, dt_seconds: f32) -> BernoulliStats {
        self.elapsed += dt_seconds;
        self.simulator.observe_tick(p, dt_seconds);

        self.simulator.stats()
    }

    /// Clears outcomes and the lab clock, used when switching modes or labs
    pub fn reset(&mut self) {
        self.simulator.reset();
        self.elapsed = 0.;
    }

    pub fn simulator(&self) -> &BernoulliSimulator<R> {
        &self.simulator
    }

    /// Seconds simulated since creation or the last reset
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Poisson spike train lab, owns the clock the event timestamps are taken from
#[derive(Debug, Clone)]
pub struct PoissonLab<R: Rng = ThreadRng> {
    simulator: PoissonSimulator<R>,
    now: f32,
}

impl PoissonLab<ThreadRng> {
    pub fn default_impl() -> Self {
        PoissonLab { simulator: PoissonSimulator::default_impl(), now: 0. }
    }
}

impl<R: Rng> PoissonLab<R> {
    pub fn with_rng(params: PoissonParams, rng: R) -> Result<Self, NeuronLabsError> {
        Ok(PoissonLab { simulator: PoissonSimulator::with_rng(params, rng)?, now: 0. })
    }

    /// Advances the lab clock by `dt_seconds` at the given rate (Hz)
    pub fn tick_poisson(&mut self, rate: f32, dt_seconds: f32) -> PoissonStats {
        self.now += dt_seconds;
        self.simulator.observe_tick(rate, dt_seconds, self.now);

        self.simulator.stats()
    }

    /// Clears events and the lab clock, used when switching modes or labs
    pub fn reset(&mut self) {
        self.simulator.reset();
        self.now = 0.;
    }

    pub fn simulator(&self) -> &PoissonSimulator<R> {
        &self.simulator
    }

    /// Current lab time (s)
    pub fn now(&self) -> f32 {
        self.now
    }
}
