//! Compilation units
//! 
//! Every function is lowered in its own session, so functions may be
//! lowered on separate workers. Rendered text is merged in declaration
//! order regardless of which worker finishes first.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sirc_common::{CompilerError, FunctionName};
use crate::errors::CodegenError;
use crate::expr::{lower_expr, Expr, Scope};
use crate::ir::{IrType, Session};

/// One function: parameters become the first registers, the body is a
/// list of expressions lowered in order inside a single block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionBody {
    pub name: FunctionName,
    #[serde(default)]
    pub ty: IrType,
    #[serde(default)]
    pub params: Vec<String>,
    pub body: Vec<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub functions: Vec<FunctionBody>,
}

/// Lower one function in a fresh session and return its rendered block
pub fn compile_function(func: &FunctionBody) -> Result<String, CodegenError> {
    let mut session = Session::new();

    let mut scope = Scope::new();
    for param in &func.params {
        let reg = session.allocate(func.ty.clone())?;
        scope.insert(param.clone(), reg);
    }

    session.emitter().open_block();
    for expr in &func.body {
        lower_expr(&mut session, &scope, expr, &func.ty)?;
    }
    session.emitter().close_block();

    debug!(
        "lowered {} ({} registers, {} lines)",
        func.name,
        session.allocator().count(),
        session.emitter().len()
    );
    Ok(session.finish())
}

fn compile_named(func: &FunctionBody) -> Result<String, CompilerError> {
    compile_function(func).map_err(|err| err.in_function(&func.name))
}

/// Lower every function of `unit` and concatenate the results in
/// declaration order. The error of the earliest failing function wins.
pub fn compile_unit(unit: &Unit, parallel: bool) -> Result<String, CompilerError> {
    info!(
        "compiling {} function(s){}",
        unit.functions.len(),
        if parallel { " in parallel" } else { "" }
    );

    let rendered: Vec<Result<String, CompilerError>> = if parallel {
        unit.functions.par_iter().map(compile_named).collect()
    } else {
        unit.functions.iter().map(compile_named).collect()
    };

    rendered.into_iter().collect()
}
