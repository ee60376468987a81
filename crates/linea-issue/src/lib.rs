//! LINEA Issue - Collision-free identifier generation
//!
//! This crate walks the space of fixed-length digit strings in odometer
//! order and issues fresh identifiers under a fixed prefix:
//! - `Alphabet`, `Odometer`, and `walk_round`, the cyclic word enumerator
//! - `CodeGenerator`, which draws a candidate suffix and advances it past
//!   already-used codes

pub mod generator;
pub mod odometer;

pub use generator::*;
pub use odometer::*;
