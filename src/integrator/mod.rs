//! Classic fourth order Runge-Kutta integration over any [`VectorField`],
//! used to trace trajectories through the phase plane on demand.

use crate::phase_plane::{State, VectorField};


/// Advances `state` by one Runge-Kutta step of size `dt`
pub fn rk4_step<F: VectorField + ?Sized>(field: &F, state: State, control: f32, dt: f32) -> State {
    let k1 = field.derivative(state, control);
    let k2 = field.derivative(state + k1 * (dt / 2.), control);
    let k3 = field.derivative(state + k2 * (dt / 2.), control);
    let k4 = field.derivative(state + k3 * dt, control);

    state + (k1 + k2 * 2. + k3 * 2. + k4) * (dt / 6.)
}

/// Lazily integrated trajectory, yields the starting state followed by each
/// integrated state until `max_steps` steps have been taken or the bounds check
/// rejects a state, the rejected state is not yielded
pub struct Trajectory<'a, F: VectorField + ?Sized, B: FnMut(&State) -> bool> {
    field: &'a F,
    start: State,
    current: Option<State>,
    control: f32,
    dt: f32,
    max_steps: usize,
    steps_taken: usize,
    started: bool,
    bounds_check: B,
}

impl<'a, F: VectorField + ?Sized, B: FnMut(&State) -> bool> Trajectory<'a, F, B> {
    /// Rewinds the trajectory to its starting state
    pub fn restart(&mut self) {
        self.current = Some(self.start);
        self.steps_taken = 0;
        self.started = false;
    }

    /// Number of integration steps taken so far
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// State the trajectory starts from
    pub fn start(&self) -> State {
        self.start
    }
}

impl<'a, F: VectorField + ?Sized, B: FnMut(&State) -> bool> Iterator for Trajectory<'a, F, B> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let current = self.current?;

        if !self.started {
            self.started = true;
            if !(self.bounds_check)(&current) {
                self.current = None;
                return None;
            }

            return Some(current);
        }

        if self.steps_taken >= self.max_steps {
            self.current = None;
            return None;
        }

        let next_state = rk4_step(self.field, current, self.control, self.dt);
        self.steps_taken += 1;

        if !(self.bounds_check)(&next_state) {
            self.current = None;
            return None;
        }

        self.current = Some(next_state);

        Some(next_state)
    }
}

/// Creates a trajectory from `start` through the given field, see [`Trajectory`],
/// use `|_| true` as the bounds check to only stop after `max_steps`
pub fn integrate_trajectory<F: VectorField + ?Sized, B: FnMut(&State) -> bool>(
    start: State,
    control: f32,
    field: &F,
    dt: f32,
    max_steps: usize,
    bounds_check: B,
) -> Trajectory<'_, F, B> {
    Trajectory {
        field,
        start,
        current: Some(start),
        control,
        dt,
        max_steps,
        steps_taken: 0,
        started: false,
        bounds_check,
    }
}
