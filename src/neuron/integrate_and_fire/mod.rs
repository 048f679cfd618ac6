//! A discrete time leaky integrate and fire neuron stepped with explicit Euler
//! updates and instantaneous threshold and reset spike handling.

use rand::Rng;
use super::input_current::InputCurrent;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Parameters of the leaky integrate and fire lab
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LifParams {
    /// Membrane capacitance (nF)
    pub capacitance: f32,
    /// Membrane resistance (MOhm)
    pub resistance: f32,
    /// Leak reversal potential (mV)
    pub e_l: f32,
    /// Time step (ms)
    pub dt: f32,
    /// Voltage threshold (mV)
    pub v_th: f32,
    /// Voltage reset value (mV)
    pub v_reset: f32,
    /// Drive current generator
    pub input: InputCurrent,
}

impl Default for LifParams {
    fn default() -> Self {
        LifParams {
            capacitance: 1., // membrane capacitance (nF)
            resistance: 10., // membrane resistance (MOhm)
            e_l: -70., // leak reversal potential (mV)
            dt: 0.1, // simulation time step (ms)
            v_th: -55., // spike threshold (mV)
            v_reset: -70., // reset potential (mV)
            input: InputCurrent::default(),
        }
    }
}

impl LifParams {
    /// Returns the default parameters
    pub fn default_impl() -> Self {
        LifParams::default()
    }

    /// Membrane time constant (ms), the product of resistance and capacitance
    pub fn tau_m(&self) -> f32 {
        self.resistance * self.capacitance
    }
}

/// Terms of the voltage update, exposed for visualizing what pushes the
/// voltage around
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Forces {
    /// Pull towards the leak reversal potential
    pub leak: f32,
    /// Push from the input current
    pub drive: f32,
    /// Sum of leak and drive
    pub net: f32,
}

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LifStepResult {
    /// Voltage after the step (mV), equal to the reset potential when spiking
    pub voltage: f32,
    /// Time after the step (ms)
    pub time: f32,
    /// Whether the threshold was crossed during the step
    pub spiked: bool,
    /// Current used for the step (nA)
    pub applied_current: f32,
    pub forces: Forces,
}

/// Calculates the leak, drive and net forces at the given voltage and current
pub fn get_forces(voltage: f32, applied_current: f32, params: &LifParams) -> Forces {
    let leak = -(voltage - params.e_l);
    let drive = params.resistance * applied_current;

    Forces { leak, drive, net: leak + drive }
}

/// Advances the neuron by `params.dt`, if the updated voltage reaches threshold
/// the neuron spikes and the voltage is reset within the same step
pub fn step_lif<R: Rng + ?Sized>(voltage: f32, time: f32, params: &LifParams, rng: &mut R) -> LifStepResult {
    let applied_current = params.input.current_at(time, rng);
    let forces = get_forces(voltage, applied_current, params);

    let mut new_voltage = voltage + (forces.net / params.tau_m()) * params.dt;

    let spiked = new_voltage >= params.v_th;
    if spiked {
        new_voltage = params.v_reset;
    }

    LifStepResult {
        voltage: new_voltage,
        time: time + params.dt,
        spiked,
        applied_current,
        forces,
    }
}

/// Iterates the neuron from `v_init` at time `0` for the given number of steps,
/// returns every step result in order
pub fn run_static_input<R: Rng + ?Sized>(
    params: &LifParams,
    v_init: f32,
    iterations: usize,
    rng: &mut R,
) -> Vec<LifStepResult> {
    let mut results = Vec::with_capacity(iterations);
    let mut voltage = v_init;
    let dt = params.dt as f64;

    for i in 0..iterations {
        let mut result = step_lif(voltage, (i as f64 * dt) as f32, params, rng);
        result.time = ((i + 1) as f64 * dt) as f32;
        voltage = result.voltage;

        results.push(result);
    }

    results
}

/// Times (ms) of every step that spiked
pub fn firing_times(results: &[LifStepResult]) -> Vec<f32> {
    results.iter()
        .filter(|i| i.spiked)
        .map(|i| i.time)
        .collect()
}

/// Mean time between consecutive spikes (ms), `None` with fewer than two spikes
pub fn firing_period(results: &[LifStepResult]) -> Option<f32> {
    let times = firing_times(results);

    if times.len() < 2 {
        return None;
    }

    let total: f32 = times.windows(2)
        .map(|pair| pair[1] - pair[0])
        .sum();

    Some(total / (times.len() - 1) as f32)
}
