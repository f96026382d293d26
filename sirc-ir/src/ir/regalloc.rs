//! Virtual register allocation
//! 
//! Registers are unlimited; allocation only hands out fresh ordinals.
//! The counter is owned state of one allocator, so independent sessions
//! never share numbering.

use log::trace;
use sirc_common::RegisterId;
use crate::errors::CodegenError;
use crate::ir::{IrType, VirtualRegister};

#[derive(Debug, Default)]
pub struct RegisterAllocator {
    /// Ordinal of the most recently issued register; 0 means none yet
    last_id: RegisterId,
}

impl RegisterAllocator {
    pub fn new() -> Self {
        Self { last_id: 0 }
    }

    /// Ordinal the next `allocate` will issue, without issuing it
    pub fn peek_next(&self) -> Result<RegisterId, CodegenError> {
        self.last_id
            .checked_add(1)
            .ok_or(CodegenError::RegisterSpaceExhausted)
    }

    /// Issue a fresh register of type `ty`. The first register is `%var1`.
    pub fn allocate(&mut self, ty: IrType) -> Result<VirtualRegister, CodegenError> {
        let id = self.peek_next()?;
        self.last_id = id;

        let reg = VirtualRegister::new(id, ty);
        trace!("allocated {reg}: {}", reg.ty());
        Ok(reg)
    }

    /// Number of registers issued since creation or the last reset
    pub fn count(&self) -> RegisterId {
        self.last_id
    }

    pub fn reset(&mut self) {
        self.last_id = 0;
    }

    #[cfg(test)]
    pub(crate) fn with_last_id(last_id: RegisterId) -> Self {
        Self { last_id }
    }
}
