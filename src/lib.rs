//! # Neuron Labs
//!
//! `neuron_labs` is the simulation engine behind a set of interactive neuron model
//! labs. A host (usually a rendering loop) drives the engine frame by frame and draws
//! whatever it returns. The engine covers
//!
//! - two dimensional phase plane models ([`phase_plane`]) integrated with a classic
//!   fourth order Runge-Kutta scheme ([`integrator`]),
//! - a discrete time leaky integrate and fire neuron with constant, pulse, noise and
//!   sine input currents ([`neuron`]),
//! - Bernoulli and Poisson point processes with running statistics and inter-spike
//!   interval histograms ([`point_process`]),
//! - session objects grouping the per lab mutable state ([`session`]).
//!
//! Every source of randomness is passed in as a [`rand::Rng`] so simulations can be
//! made reproducible with a seeded generator.
//!
//! ## Example Code
//!
//! ### Tracing a FitzHugh-Nagumo trajectory
//!
//! ```rust
//! use neuron_labs::{
//!     integrator::integrate_trajectory,
//!     phase_plane::{ModelVariant, State, ViewBounds},
//! };
//!
//! let variant = ModelVariant::fitzhugh_nagumo();
//! let bounds = ViewBounds::default();
//!
//! // follow the flow from the hovered point until it leaves the view
//! let trajectory: Vec<State> = integrate_trajectory(
//!     State::new(-1., -0.5),
//!     0.5,
//!     &variant,
//!     0.05,
//!     400,
//!     |state| bounds.contains(state),
//! ).collect();
//!
//! assert!(!trajectory.is_empty());
//! ```
//!
//! ### Driving the integrate and fire lab
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use neuron_labs::{
//!     error::NeuronLabsError,
//!     neuron::{
//!         input_current::{InputCurrent, PulseConfig},
//!         integrate_and_fire::LifParams,
//!     },
//!     session::LifSession,
//! };
//!
//! fn main() -> Result<(), NeuronLabsError> {
//!     let params = LifParams {
//!         input: InputCurrent::pulse(PulseConfig::default()),
//!         ..LifParams::default()
//!     };
//!
//!     let mut session = LifSession::with_rng(params, 300, StdRng::seed_from_u64(0))?;
//!
//!     // ten steps per rendered frame
//!     for _ in 0..100 {
//!         session.advance(10);
//!     }
//!
//!     // keep the current trace around for comparison then change a parameter
//!     session.capture_ghost();
//!     session.params_mut().resistance = 20.;
//!     session.advance(10);
//!
//!     assert_eq!(session.history().len(), 300);
//!     assert_eq!(session.ghost().map(|i| i.len()), Some(300));
//!
//!     Ok(())
//! }
//! ```

pub mod distribution;
pub mod error;
pub mod integrator;
pub mod neuron;
pub mod phase_plane;
pub mod point_process;
pub mod session;
