//! Two dimensional vector fields for the continuous time labs, each [`ModelVariant`]
//! maps a state and a control input to a derivative, use [`evaluate_field`] to
//! draw flow vectors and [`sample_flow_field`] to evaluate a whole grid at once.

use std::ops::{Add, Mul};
use ndarray::Array2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// A point in the phase plane, `x` is the voltage-like axis and `y` is the
/// recovery-like axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    /// Voltage-like variable
    pub x: f32,
    /// Recovery-like variable
    pub y: f32,
}

impl State {
    pub fn new(x: f32, y: f32) -> Self {
        State { x, y }
    }

    /// Squared distance from the origin, conserved by the undamped resonator
    pub fn energy(&self) -> f32 {
        self.x.powf(2.) + self.y.powf(2.)
    }
}

/// Rate of change of a [`State`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Derivative {
    pub dx: f32,
    pub dy: f32,
}

impl Derivative {
    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f32 {
        (self.dx.powf(2.) + self.dy.powf(2.)).sqrt()
    }
}

impl Add for Derivative {
    type Output = Derivative;

    fn add(self, rhs: Derivative) -> Derivative {
        Derivative { dx: self.dx + rhs.dx, dy: self.dy + rhs.dy }
    }
}

impl Mul<f32> for Derivative {
    type Output = Derivative;

    fn mul(self, scalar: f32) -> Derivative {
        Derivative { dx: self.dx * scalar, dy: self.dy * scalar }
    }
}

impl Add<Derivative> for State {
    type Output = State;

    fn add(self, rhs: Derivative) -> State {
        State { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

/// Structural constants of the recovery variable in the cubic models
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecoveryConstants {
    /// Recovery offset
    pub a: f32,
    /// Recovery self coupling
    pub b: f32,
    /// Recovery time scale
    pub tau: f32,
}

impl Default for RecoveryConstants {
    fn default() -> Self {
        RecoveryConstants {
            a: 0.7,
            b: 0.8,
            tau: 0.08,
        }
    }
}

/// Dynamical systems available in the phase plane labs, the control input
/// passed alongside the variant is an injected current for the leak and cubic
/// models and a damping coefficient for the resonator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModelVariant {
    /// `dx = -x + c`, `dy = -y`
    LinearLeak,
    /// `dx = y`, `dy = -x - max(0, c) * y`
    DampedResonator,
    /// `dx = x - x^3 / 3 - y + c`, `dy = tau * (x + a - b * y)`
    FitzHughNagumo(RecoveryConstants),
    /// Same cubic form as [`ModelVariant::FitzHughNagumo`], used as the
    /// general purpose teaching model
    GenericCubic(RecoveryConstants),
}

impl Default for ModelVariant {
    fn default() -> Self {
        ModelVariant::fitzhugh_nagumo()
    }
}

impl ModelVariant {
    /// FitzHugh-Nagumo model with the standard constants
    pub fn fitzhugh_nagumo() -> Self {
        ModelVariant::FitzHughNagumo(RecoveryConstants::default())
    }

    /// Generic cubic model with the standard constants
    pub fn generic_cubic() -> Self {
        ModelVariant::GenericCubic(RecoveryConstants::default())
    }

    /// Human readable name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            ModelVariant::LinearLeak => "linear leak",
            ModelVariant::DampedResonator => "damped resonator",
            ModelVariant::FitzHughNagumo(_) => "FitzHugh-Nagumo",
            ModelVariant::GenericCubic(_) => "generic cubic",
        }
    }
}

/// A two dimensional autonomous system driven by a scalar control input
pub trait VectorField {
    /// Calculates the derivative at the given state
    fn derivative(&self, state: State, control: f32) -> Derivative;
}

fn cubic_derivative(state: State, control: f32, constants: &RecoveryConstants) -> Derivative {
    Derivative {
        dx: state.x - (state.x.powf(3.) / 3.) - state.y + control,
        dy: constants.tau * (state.x + constants.a - constants.b * state.y),
    }
}

impl VectorField for ModelVariant {
    fn derivative(&self, state: State, control: f32) -> Derivative {
        match self {
            ModelVariant::LinearLeak => Derivative {
                dx: -state.x + control,
                dy: -state.y,
            },
            ModelVariant::DampedResonator => Derivative {
                dx: state.y,
                // negative damping would inject energy
                dy: -state.x - control.max(0.) * state.y,
            },
            ModelVariant::FitzHughNagumo(constants) | ModelVariant::GenericCubic(constants) => {
                cubic_derivative(state, control, constants)
            }
        }
    }
}

/// Evaluates the given model variant at a state with the given control input
pub fn evaluate_field(state: State, control: f32, variant: &ModelVariant) -> Derivative {
    variant.derivative(state, control)
}

/// Rectangular region of the phase plane that is currently visible
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Default for ViewBounds {
    fn default() -> Self {
        ViewBounds {
            x_min: -3.,
            x_max: 3.,
            y_min: -3.,
            y_max: 3.,
        }
    }
}

impl ViewBounds {
    /// Whether the state lies inside the bounds (edges included)
    pub fn contains(&self, state: &State) -> bool {
        state.x >= self.x_min && state.x <= self.x_max &&
        state.y >= self.y_min && state.y <= self.y_max
    }
}

/// A derivative anchored at the grid position it was evaluated at
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowVector {
    pub position: State,
    pub derivative: Derivative,
}

fn grid_coordinate(min: f32, max: f32, index: usize, count: usize) -> f32 {
    if count < 2 {
        return (min + max) / 2.;
    }

    min + (max - min) * (index as f32 / (count - 1) as f32)
}

/// Evaluates the field on a regular `rows` by `cols` grid spanning the bounds,
/// row `0` is at `y_min` and column `0` is at `x_min`, a grid with a single row or
/// column is placed at the centre of the bounds
pub fn sample_flow_field<F: VectorField>(
    field: &F,
    control: f32,
    bounds: &ViewBounds,
    rows: usize,
    cols: usize,
) -> Array2<FlowVector> {
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let position = State {
            x: grid_coordinate(bounds.x_min, bounds.x_max, j, cols),
            y: grid_coordinate(bounds.y_min, bounds.y_max, i, rows),
        };

        FlowVector { position, derivative: field.derivative(position, control) }
    })
}
