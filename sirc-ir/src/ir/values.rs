//! IR Value Representations
//! 
//! Operands of IR instructions: virtual registers and literals.

use sirc_common::RegisterId;
use std::fmt;
use crate::ir::IrType;

/// Fixed prefix of every rendered register token
pub const REGISTER_PREFIX: &str = "%var";

/// A single-assignment virtual register.
///
/// Identity is the ordinal; the type tag travels with it. Registers are
/// never renumbered, so clones may be shared freely between instructions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualRegister {
    id: RegisterId,
    ty: IrType,
}

impl VirtualRegister {
    pub(crate) fn new(id: RegisterId, ty: IrType) -> Self {
        Self { id, ty }
    }

    pub fn id(&self) -> RegisterId {
        self.id
    }

    pub fn ty(&self) -> &IrType {
        &self.ty
    }
}

impl fmt::Display for VirtualRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REGISTER_PREFIX}{}", self.id)
    }
}

/// IR Value - represents operands in IR instructions
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Previously defined register
    Register(VirtualRegister),

    /// Constant integer
    Constant(i64),

    /// Constant floating point
    Float(f64),
}

impl Value {
    /// Type of a register operand; literals take the instruction's type
    pub fn ty(&self) -> Option<&IrType> {
        match self {
            Value::Register(reg) => Some(reg.ty()),
            Value::Constant(_) | Value::Float(_) => None,
        }
    }

    /// Whether a literal operand can be spelled at `ty`
    pub fn fits(&self, ty: &IrType) -> bool {
        match self {
            Value::Register(reg) => reg.ty() == ty,
            Value::Constant(_) => ty.is_integer(),
            Value::Float(_) => ty.is_float(),
        }
    }
}

impl From<VirtualRegister> for Value {
    fn from(reg: VirtualRegister) -> Self {
        Value::Register(reg)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Constant(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Float(val)
    }
}

impl Value {
    /// Operand text when the instruction type is `ty`.
    ///
    /// Float literals are rounded to the precision of `ty`; a value the
    /// decimal form cannot spell exactly is written as a hex double.
    pub fn render_as(&self, ty: &IrType) -> String {
        match self {
            Value::Float(val) => float_literal(*val, ty),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Register(reg) => write!(f, "{reg}"),
            Value::Constant(val) => write!(f, "{val}"),
            Value::Float(val) => write!(f, "{}", float_literal(*val, &IrType::F64)),
        }
    }
}

fn float_literal(val: f64, ty: &IrType) -> String {
    let rounded = match ty {
        IrType::F32 => f64::from(val as f32),
        _ => val,
    };
    if !rounded.is_finite() || rounded.to_bits() != val.to_bits() {
        return format!("0x{:016X}", rounded.to_bits());
    }

    // Decimal literals must carry a decimal point.
    let text = format!("{rounded:?}");
    if text.contains('.') {
        return text;
    }
    match text.find('e') {
        Some(pos) => format!("{}.0{}", &text[..pos], &text[pos..]),
        None => format!("{text}.0"),
    }
}
