//! IR Operations
//! 
//! Source-level binary operators and the closed table that maps an
//! operator and an operand type to an instruction mnemonic.

use std::fmt;
use std::str::FromStr;
use crate::errors::CodegenError;
use crate::ir::IrType;

/// Binary operator tokens a caller may ask to lower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOperator {
    pub fn token(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for BinaryOperator {
    type Err = CodegenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let op = match token {
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Sub,
            "*" => BinaryOperator::Mul,
            "/" => BinaryOperator::Div,
            "%" => BinaryOperator::Rem,
            "&" => BinaryOperator::BitAnd,
            "|" => BinaryOperator::BitOr,
            "^" => BinaryOperator::BitXor,
            "<<" => BinaryOperator::Shl,
            ">>" => BinaryOperator::Shr,
            _ => {
                return Err(CodegenError::UnsupportedOperator {
                    operator: token.to_string(),
                })
            }
        };
        Ok(op)
    }
}

/// Instruction opcode plus its wrap qualifier, e.g. `add nsw`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mnemonic {
    pub opcode: &'static str,
    /// Forwarded verbatim; the consumer may assume signed overflow never happens
    pub no_signed_wrap: bool,
}

impl Mnemonic {
    const fn nsw(opcode: &'static str) -> Self {
        Self { opcode, no_signed_wrap: true }
    }

    const fn plain(opcode: &'static str) -> Self {
        Self { opcode, no_signed_wrap: false }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.no_signed_wrap {
            write!(f, "{} nsw", self.opcode)
        } else {
            write!(f, "{}", self.opcode)
        }
    }
}

/// Pick the mnemonic for `op` over operands of type `ty`.
///
/// Every operator is listed; a new operator will not compile until it is
/// given a row here.
pub fn select_mnemonic(op: BinaryOperator, ty: &IrType) -> Result<Mnemonic, CodegenError> {
    if ty.is_pointer() {
        return Err(CodegenError::UnsupportedOperandType { operator: op, ty: ty.clone() });
    }
    let float = ty.is_float();

    match op {
        BinaryOperator::Add if float => Ok(Mnemonic::plain("fadd")),
        BinaryOperator::Add => Ok(Mnemonic::nsw("add")),
        BinaryOperator::Sub if float => Ok(Mnemonic::plain("fsub")),
        BinaryOperator::Sub => Ok(Mnemonic::nsw("sub")),
        BinaryOperator::Mul if float => Ok(Mnemonic::plain("fmul")),
        BinaryOperator::Mul => Ok(Mnemonic::nsw("mul")),
        BinaryOperator::Div
        | BinaryOperator::Rem
        | BinaryOperator::BitAnd
        | BinaryOperator::BitOr
        | BinaryOperator::BitXor
        | BinaryOperator::Shl
        | BinaryOperator::Shr => Err(CodegenError::UnsupportedOperator {
            operator: op.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_table() {
        for ty in [IrType::I8, IrType::I16, IrType::I32, IrType::I64] {
            assert_eq!(select_mnemonic(BinaryOperator::Add, &ty).unwrap().to_string(), "add nsw");
            assert_eq!(select_mnemonic(BinaryOperator::Sub, &ty).unwrap().to_string(), "sub nsw");
            assert_eq!(select_mnemonic(BinaryOperator::Mul, &ty).unwrap().to_string(), "mul nsw");
        }
    }

    #[test]
    fn test_float_table() {
        assert_eq!(select_mnemonic(BinaryOperator::Add, &IrType::F64).unwrap().to_string(), "fadd");
        assert_eq!(select_mnemonic(BinaryOperator::Sub, &IrType::F32).unwrap().to_string(), "fsub");
        assert_eq!(select_mnemonic(BinaryOperator::Mul, &IrType::F64).unwrap().to_string(), "fmul");
    }

    #[test]
    fn test_operators_outside_table() {
        let outside = [
            BinaryOperator::Div,
            BinaryOperator::Rem,
            BinaryOperator::Shl,
            BinaryOperator::BitXor,
        ];
        for op in outside {
            let err = select_mnemonic(op, &IrType::I32).unwrap_err();
            assert_eq!(err, CodegenError::UnsupportedOperator { operator: op.token().to_string() });
        }
    }

    #[test]
    fn test_pointer_operands_rejected() {
        let ptr = IrType::Ptr(Box::new(IrType::I32));
        assert!(matches!(
            select_mnemonic(BinaryOperator::Add, &ptr),
            Err(CodegenError::UnsupportedOperandType { operator: BinaryOperator::Add, .. })
        ));
    }

    #[test]
    fn test_token_parsing() {
        assert_eq!("*".parse::<BinaryOperator>().unwrap(), BinaryOperator::Mul);
        assert_eq!(">>".parse::<BinaryOperator>().unwrap(), BinaryOperator::Shr);
        assert!(matches!(
            "**".parse::<BinaryOperator>(),
            Err(CodegenError::UnsupportedOperator { ref operator }) if operator == "**"
        ));
    }
}
