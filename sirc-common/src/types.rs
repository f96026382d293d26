//! Common types used throughout the compiler

/// Virtual register ordinal, unique within one emission session
pub type RegisterId = u32;

/// Name of a function inside a compilation unit
pub type FunctionName = String;
