//! SSA IR Compiler - Intermediate Representation
//! 
//! This crate lowers arithmetic expressions into a textual, SSA-style IR:
//! a linear sequence of typed virtual-register assignments bracketed by
//! block markers, ready to be handed to an external native backend.
//! 
//! - `ir`: type model, operands, instruction selection, register
//!   allocation, the emission log and binary lowering
//! - `expr`: expression trees and the post-order walker that chains
//!   lowered registers together
//! - `unit`: whole compilation units, one session per function

pub mod errors;
pub mod expr;
pub mod ir;
pub mod unit;

pub use errors::CodegenError;
pub use expr::{lower_expr, Expr};
pub use ir::{
    BinaryOperator, Emitter, Instruction, IrType, Lowering, Mnemonic, RegisterAllocator,
    Session, Value, VirtualRegister,
};
pub use unit::{compile_function, compile_unit, FunctionBody, Unit};
