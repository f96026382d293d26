//! Code generation error types

use sirc_common::CompilerError;
use thiserror::Error;
use crate::ir::{BinaryOperator, IrType};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodegenError {
    #[error("Unsupported operator '{operator}'")]
    UnsupportedOperator {
        operator: String,
    },

    #[error("Operator '{operator}' has no instruction for operands of type {ty}")]
    UnsupportedOperandType {
        operator: BinaryOperator,
        ty: IrType,
    },

    #[error("Operand '{operand}' does not have type {expected}")]
    OperandTypeMismatch {
        operand: String,
        expected: IrType,
    },

    #[error("Undefined variable '{name}'")]
    UndefinedVariable {
        name: String,
    },

    #[error("Register {register} is already defined")]
    RegisterRedefined {
        register: String,
    },

    #[error("Virtual register counter exhausted")]
    RegisterSpaceExhausted,
}

impl CodegenError {
    /// Attach the failing function's name and lift into the crate-boundary error
    pub fn in_function(self, function: &str) -> CompilerError {
        match self {
            CodegenError::RegisterSpaceExhausted => CompilerError::Internal {
                message: format!("{self} in {function}"),
            },
            other => CompilerError::codegen_error(function, other.to_string()),
        }
    }
}
