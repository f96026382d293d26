//! Expression trees and their lowering
//! 
//! The walker lowers operands left to right before their operator and
//! threads each returned register into the enclosing operation.

use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::errors::CodegenError;
use crate::ir::{BinaryOperator, IrType, Session, Value, VirtualRegister};

/// Arithmetic expression over literals and named parameters.
///
/// In JSON a leaf is a bare number or a parameter name; an operation is
/// `{"op": "+", "lhs": ..., "rhs": ...}`. The operator stays a raw token
/// until lowering, where tokens outside the table are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Var(String),
    Binary {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOperator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op: op.token().to_string(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn var(name: &str) -> Self {
        Expr::Var(name.to_string())
    }

    /// Number of operations, i.e. instructions the tree lowers to
    pub fn op_count(&self) -> usize {
        match self {
            Expr::Int(_) | Expr::Float(_) | Expr::Var(_) => 0,
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.op_count() + rhs.op_count(),
        }
    }
}

/// Named registers visible to an expression
pub type Scope = HashMap<String, VirtualRegister>;

/// Lower `expr` at type `ty`. Leaves become operands directly; each
/// operation emits one instruction.
/// An unknown operator token fails before its operands are lowered.
pub fn lower_expr(
    session: &mut Session,
    scope: &Scope,
    expr: &Expr,
    ty: &IrType,
) -> Result<Value, CodegenError> {
    match expr {
        Expr::Int(val) => Ok(Value::Constant(*val)),
        Expr::Float(val) => Ok(Value::Float(*val)),
        Expr::Var(name) => scope
            .get(name)
            .cloned()
            .map(Value::Register)
            .ok_or_else(|| CodegenError::UndefinedVariable { name: name.clone() }),
        Expr::Binary { op, lhs, rhs } => {
            let op = op.parse::<BinaryOperator>()?;
            let lhs = lower_expr(session, scope, lhs, ty)?;
            let rhs = lower_expr(session, scope, rhs, ty)?;
            trace!("lowering {lhs} {op} {rhs}");
            let result = session.lowering().lower_binary_typed(op, ty.clone(), lhs, rhs)?;
            Ok(Value::Register(result))
        }
    }
}
