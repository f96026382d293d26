//! SSA IR Compiler - Common Types and Utilities
//! 
//! This crate contains the identifiers and the top-level error type
//! shared by the IR core and the driver.

pub mod error;
pub mod types;

pub use error::CompilerError;
pub use types::*;
