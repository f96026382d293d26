//! IR Type System
//! 
//! Type tags carried by virtual registers. The tag decides which
//! mnemonics are legal for an operation on values of that type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IR Type system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrType {
    /// Integer types with bit width
    I1,   // Boolean
    I8,
    I16,
    I32,  // Default integer
    I64,

    /// IEEE floating point
    F32,
    F64,

    /// Pointer type
    Ptr(Box<IrType>),
}

impl IrType {
    /// The fixed-width signed integer used when the caller gives no type
    pub fn default_int() -> Self {
        IrType::I32
    }

    /// Check if this is an integer type
    pub fn is_integer(&self) -> bool {
        matches!(self, IrType::I1 | IrType::I8 | IrType::I16 | IrType::I32 | IrType::I64)
    }

    /// Check if this is a floating point type
    pub fn is_float(&self) -> bool {
        matches!(self, IrType::F32 | IrType::F64)
    }

    /// Check if this is a pointer type
    pub fn is_pointer(&self) -> bool {
        matches!(self, IrType::Ptr(_))
    }

    /// Width of the value in bits; pointers are 64-bit
    pub fn bit_width(&self) -> u32 {
        match self {
            IrType::I1 => 1,
            IrType::I8 => 8,
            IrType::I16 => 16,
            IrType::I32 | IrType::F32 => 32,
            IrType::I64 | IrType::F64 | IrType::Ptr(_) => 64,
        }
    }
}

impl Default for IrType {
    fn default() -> Self {
        Self::default_int()
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::I1 => write!(f, "i1"),
            IrType::I8 => write!(f, "i8"),
            IrType::I16 => write!(f, "i16"),
            IrType::I32 => write!(f, "i32"),
            IrType::I64 => write!(f, "i64"),
            IrType::F32 => write!(f, "float"),
            IrType::F64 => write!(f, "double"),
            IrType::Ptr(target) => write!(f, "{target}*"),
        }
    }
}
