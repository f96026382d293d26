//! Instruction emission
//! 
//! The emitter is an append-only log of IR lines. It does not validate
//! instruction text or block balance; the only check it makes is that a
//! register is defined at most once per session.

use log::debug;
use sirc_common::RegisterId;
use std::collections::HashSet;
use std::fmt;
use crate::errors::CodegenError;
use crate::ir::VirtualRegister;

const BLOCK_OPEN: &str = "{";
const BLOCK_CLOSE: &str = "}";

#[derive(Debug, Default)]
pub struct Emitter {
    lines: Vec<String>,
    defined: HashSet<RegisterId>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line verbatim
    pub fn append_line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn open_block(&mut self) {
        self.append_line(BLOCK_OPEN);
    }

    pub fn close_block(&mut self) {
        self.append_line(BLOCK_CLOSE);
    }

    /// Append `<register> = <node>`, making `node` the register's definition.
    ///
    /// A second definition of the same register is rejected and nothing is
    /// appended.
    pub fn assign(
        &mut self,
        register: &VirtualRegister,
        node: &impl fmt::Display,
    ) -> Result<(), CodegenError> {
        if !self.defined.insert(register.id()) {
            return Err(CodegenError::RegisterRedefined {
                register: register.to_string(),
            });
        }
        let line = format!("{register} = {node}");
        debug!("emit: {line}");
        self.lines.push(line);
        Ok(())
    }

    /// Whether `register` has been assigned in this session
    pub fn is_defined(&self, register: &VirtualRegister) -> bool {
        self.defines(register.id())
    }

    /// Whether the register with ordinal `id` has been assigned in this session
    pub fn defines(&self, id: RegisterId) -> bool {
        self.defined.contains(&id)
    }

    /// Discard the whole log
    pub fn clear(&mut self) {
        self.lines.clear();
        self.defined.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The accumulated log, every line newline-terminated, in emission order
    pub fn render(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
