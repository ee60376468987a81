//! LINEA Symbol - EAN-13 symbology
//!
//! This crate turns a validated identifier into its printed symbol form:
//! - `Bar` and `BarSequence`, the two-valued sequence type
//! - The static parity tables, guard patterns, and structure templates
//! - `EncodedCode`, the full 95-bar sequence plus its tagged elements

pub mod bars;
pub mod encoder;
pub mod symbols;

pub use bars::*;
pub use encoder::*;
pub use symbols::*;
