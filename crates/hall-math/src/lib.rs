//! Mathematical primitives for the SCPN Hall thruster solver.

pub mod finite_diff;
pub mod interp;
pub mod tridiag;
