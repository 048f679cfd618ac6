//! The integrate and fire lab, input current generators, the stepper itself
//! and the bounded history the stepper's output is recorded into.

pub mod input_current;
pub mod integrate_and_fire;
pub mod history;
