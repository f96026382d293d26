//! Binary arithmetic lowering
//! 
//! Lowers one operator over two already-materialized operands into a
//! single instruction bound to a fresh register. Nested expressions are
//! composed by the caller, which threads the returned registers back in.

use crate::errors::CodegenError;
use crate::ir::{
    select_mnemonic, BinaryOperator, Emitter, Instruction, IrType, RegisterAllocator, Value,
    VirtualRegister, REGISTER_PREFIX,
};

/// Borrowed view over one session's allocator and emitter
pub struct Lowering<'a> {
    allocator: &'a mut RegisterAllocator,
    emitter: &'a mut Emitter,
}

impl<'a> Lowering<'a> {
    pub fn new(allocator: &'a mut RegisterAllocator, emitter: &'a mut Emitter) -> Self {
        Self { allocator, emitter }
    }

    /// Lower `lhs op rhs` over the default integer type
    pub fn lower_binary(
        &mut self,
        op: BinaryOperator,
        lhs: Value,
        rhs: Value,
    ) -> Result<VirtualRegister, CodegenError> {
        self.lower_binary_typed(op, IrType::default_int(), lhs, rhs)
    }

    /// Lower `lhs op rhs` with both operands and the result of type `ty`.
    ///
    /// All checks run before the result register is allocated, so a failed
    /// call leaves the log and the register counter untouched.
    pub fn lower_binary_typed(
        &mut self,
        op: BinaryOperator,
        ty: IrType,
        lhs: Value,
        rhs: Value,
    ) -> Result<VirtualRegister, CodegenError> {
        let mnemonic = select_mnemonic(op, &ty)?;
        for operand in [&lhs, &rhs] {
            if !operand.fits(&ty) {
                return Err(CodegenError::OperandTypeMismatch {
                    operand: operand.to_string(),
                    expected: ty,
                });
            }
        }

        // An allocator reset without clearing its emitter hands out taken ordinals.
        let next = self.allocator.peek_next()?;
        if self.emitter.defines(next) {
            return Err(CodegenError::RegisterRedefined {
                register: format!("{REGISTER_PREFIX}{next}"),
            });
        }

        let result = self.allocator.allocate(ty.clone())?;
        let instr = Instruction::Binary { mnemonic, ty, lhs, rhs };
        self.emitter.assign(&result, &instr)?;
        Ok(result)
    }

    /// Lower an operator given as its source token, e.g. `"+"`
    pub fn lower_token(
        &mut self,
        token: &str,
        lhs: Value,
        rhs: Value,
    ) -> Result<VirtualRegister, CodegenError> {
        let op = token.parse::<BinaryOperator>()?;
        self.lower_binary(op, lhs, rhs)
    }
}
