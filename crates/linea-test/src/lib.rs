//! LINEA Test - Integration harness
//!
//! An in-memory code registry standing in for the caller's database, and
//! a sheet-filling routine that exercises the full generate-then-encode
//! flow the way a layout collaborator would.

pub mod registry;

pub use registry::*;
