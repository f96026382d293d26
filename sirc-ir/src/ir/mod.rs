//! Textual SSA intermediate representation
//! 
//! ## Architecture
//! 
//! - `types` - Type tags carried by registers and instructions
//! - `values` - Virtual registers and literal operands
//! - `ops` - Source operators and the operator-to-mnemonic table
//! - `instructions` - Renderable instruction nodes
//! - `regalloc` - Fresh register issuance
//! - `emitter` - The append-only emission log
//! - `lowering` - Binary arithmetic lowering
//! - `session` - One allocator/emitter pair per compilation unit

pub use self::types::IrType;
pub use self::values::{Value, VirtualRegister, REGISTER_PREFIX};
pub use self::ops::{select_mnemonic, BinaryOperator, Mnemonic};
pub use self::instructions::Instruction;
pub use self::regalloc::RegisterAllocator;
pub use self::emitter::Emitter;
pub use self::lowering::Lowering;
pub use self::session::Session;

mod types;
mod values;
mod ops;
mod instructions;
mod regalloc;
mod emitter;
mod lowering;
mod session;
