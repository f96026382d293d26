//! SSA IR Compiler driver
//! 
//! Reads a compilation unit described as JSON, lowers it and hands the
//! IR text back to the caller.

use log::info;
use sirc_common::CompilerError;
use sirc_ir::{compile_unit, Unit};
use std::fs;
use std::path::Path;

/// Parse a compilation unit from JSON text
pub fn parse_unit(source: &str) -> Result<Unit, CompilerError> {
    serde_json::from_str(source)
        .map_err(|e| CompilerError::config_error(format!("invalid unit description: {e}")))
}

/// Read and parse a compilation unit from `path`
pub fn load_unit(path: &Path) -> Result<Unit, CompilerError> {
    let source = fs::read_to_string(path)?;
    let unit = parse_unit(&source)?;
    info!("loaded {} function(s) from {}", unit.functions.len(), path.display());
    Ok(unit)
}

/// Lower `input` and write the IR to `output`, or return it when no output is given
pub fn lower_file(
    input: &Path,
    output: Option<&Path>,
    parallel: bool,
) -> Result<Option<String>, CompilerError> {
    let unit = load_unit(input)?;
    let ir = compile_unit(&unit, parallel)?;

    match output {
        Some(path) => {
            fs::write(path, &ir)?;
            info!("IR written to {}", path.display());
            Ok(None)
        }
        None => Ok(Some(ir)),
    }
}

/// Lower `input` without keeping the output; returns the number of lines produced
pub fn check_file(input: &Path) -> Result<usize, CompilerError> {
    let unit = load_unit(input)?;
    let ir = compile_unit(&unit, false)?;
    Ok(ir.lines().count())
}
