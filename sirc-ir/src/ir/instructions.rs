//! IR Instructions
//! 
//! Right-hand sides that the emitter binds to a register.

use std::fmt;
use crate::ir::{IrType, Mnemonic, Value};

/// IR Instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Binary operation: mnemonic ty lhs, rhs
    Binary {
        mnemonic: Mnemonic,
        ty: IrType,
        lhs: Value,
        rhs: Value,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Binary { mnemonic, ty, lhs, rhs } => {
                write!(f, "{mnemonic} {ty} {}, {}", lhs.render_as(ty), rhs.render_as(ty))
            }
        }
    }
}
