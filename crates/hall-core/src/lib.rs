//! Finite-volume update engine for the 1-D multi-fluid Hall thruster discharge.
//!
//! Layers, leaf first: thermodynamic closures, boundary conditions, reaction
//! rates, flux functions, sources, electron closures and the potential solve,
//! the per-step orchestrator, and a reference driver.

pub mod bfield;
pub mod boundary;
pub mod cache;
pub mod electrons;
pub mod energy;
pub mod flux;
pub mod ionization;
pub mod layout;
pub mod params;
pub mod potential;
pub mod rates;
pub mod reconstruct;
pub mod rhs;
pub mod simulation;
pub mod source;
pub mod thermo;
pub mod update;

pub use params::Params;
pub use simulation::{initial_condition, Simulation, Solution};
pub use update::{update_values, StepOutcome, TerminationReason};
