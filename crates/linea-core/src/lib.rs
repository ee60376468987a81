//! LINEA Core - Identifier model and check digit arithmetic
//!
//! This crate defines the types shared by the rest of the LINEA workspace:
//! - The validated 13-digit `Identifier`
//! - The GS1 weighted mod-10 check digit function
//! - The workspace-wide error enum

pub mod checksum;
pub mod error;
pub mod identifier;

pub use checksum::*;
pub use error::*;
pub use identifier::*;
