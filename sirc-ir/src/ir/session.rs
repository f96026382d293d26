//! Compilation sessions
//! 
//! A session owns the allocator/emitter pair of one compilation unit.
//! Sessions are not shared between threads; concurrent lowering runs one
//! session per worker.

use crate::errors::CodegenError;
use crate::ir::{Emitter, IrType, Lowering, RegisterAllocator, VirtualRegister};

#[derive(Debug, Default)]
pub struct Session {
    allocator: RegisterAllocator,
    emitter: Emitter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lowering(&mut self) -> Lowering<'_> {
        Lowering::new(&mut self.allocator, &mut self.emitter)
    }

    pub fn allocate(&mut self, ty: IrType) -> Result<VirtualRegister, CodegenError> {
        self.allocator.allocate(ty)
    }

    pub fn emitter(&mut self) -> &mut Emitter {
        &mut self.emitter
    }

    pub fn allocator(&self) -> &RegisterAllocator {
        &self.allocator
    }

    /// Reset numbering and empty the log for the next compilation unit
    pub fn clear(&mut self) {
        self.allocator.reset();
        self.emitter.clear();
    }

    pub fn render(&self) -> String {
        self.emitter.render()
    }

    /// Consume the session, handing back its rendered log
    pub fn finish(self) -> String {
        self.emitter.render()
    }
}
