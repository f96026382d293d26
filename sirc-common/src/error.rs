//! Error handling for the SSA IR compiler
//! 
//! `CompilerError` is the error every crate boundary speaks. Phase-specific
//! errors (such as the IR core's `CodegenError`) convert into it.

use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Code generation error in {function}: {message}")]
    Codegen {
        function: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal compiler error: {message}")]
    Internal { message: String },
}

impl CompilerError {
    /// Create a codegen error scoped to one function
    pub fn codegen_error(function: &str, message: String) -> Self {
        CompilerError::Codegen {
            function: function.to_string(),
            message,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: String) -> Self {
        CompilerError::Config { message }
    }

    /// Whether the error points at a defect inside the compiler itself
    pub fn is_internal(&self) -> bool {
        matches!(self, CompilerError::Internal { .. })
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::Io {
            message: err.to_string(),
        }
    }
}

/// Convert from String (for simple error cases)
impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::Internal { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codegen_error_display() {
        let err = CompilerError::codegen_error("main", "unsupported operator '/'".to_string());
        assert_eq!(
            err.to_string(),
            "Code generation error in main: unsupported operator '/'"
        );
        assert!(!err.is_internal());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: CompilerError = io.into();
        assert!(matches!(err, CompilerError::Io { ref message } if message == "missing.json"));
    }

    #[test]
    fn test_string_is_internal() {
        let err: CompilerError = "counter overflow".to_string().into();
        assert!(err.is_internal());
        assert_eq!(err.to_string(), "Internal compiler error: counter overflow");
    }
}
