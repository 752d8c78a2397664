//! Unified error type for boundmap operations.
//!
//! `BoundmapError` gives every failure a category, a structured error code
//! and enough context to decide how it should surface: as an HTTP status, a
//! process exit code, or a structured log record.
//!
//! # Error Codes
//!
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Parse errors (malformed JSON catalogs, malformed TOML config)
//! - E020-E029: Configuration errors
//! - E030-E039: Analysis errors (internal computation failures)
//! - E050-E059: Validation errors
//!
//! # Example
//!
//! ```rust
//! use boundmap::boundmap_error::{BoundmapError, ErrorCode};
//!
//! let err = BoundmapError::validation("boundary #0 has an empty id");
//! assert_eq!(err.code(), ErrorCode::VALIDATION_GENERIC);
//! assert_eq!(err.http_status(), 400);
//! assert!(err.is_user_fixable());
//! ```

use crate::observability::OptimizationPhase;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - permission denied
    pub const IO_PERMISSION_DENIED: ErrorCode = ErrorCode("E002");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Parse error - empty input
    pub const PARSE_EMPTY: ErrorCode = ErrorCode("E010");
    /// Parse error - malformed JSON
    pub const PARSE_JSON: ErrorCode = ErrorCode("E011");
    /// Parse error - malformed TOML
    pub const PARSE_TOML: ErrorCode = ErrorCode("E012");

    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - file not found
    pub const CONFIG_FILE_NOT_FOUND: ErrorCode = ErrorCode("E022");

    /// Analysis error - metric calculation failed
    pub const ANALYSIS_METRICS: ErrorCode = ErrorCode("E030");
    /// Analysis error - boundary transformation failed
    pub const ANALYSIS_TRANSFORM: ErrorCode = ErrorCode("E031");
    /// Analysis error - migration planning failed
    pub const ANALYSIS_PLANNING: ErrorCode = ErrorCode("E032");
    /// Analysis error - generic
    pub const ANALYSIS_GENERIC: ErrorCode = ErrorCode("E039");

    /// Validation error - generic
    pub const VALIDATION_GENERIC: ErrorCode = ErrorCode("E050");
    /// Validation error - duplicate identity
    pub const VALIDATION_DUPLICATE_ID: ErrorCode = ErrorCode("E051");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unified error type for boundmap operations.
#[derive(Debug, Clone)]
pub enum BoundmapError {
    /// I/O and filesystem errors.
    Io {
        /// Error code for documentation lookup.
        code: ErrorCode,
        /// Human-readable error message.
        message: String,
        /// Associated file path, if any.
        path: Option<PathBuf>,
        /// Source error for debugging.
        source: Option<Arc<std::io::Error>>,
    },

    /// Malformed input documents.
    Parse {
        /// Error code for documentation lookup.
        code: ErrorCode,
        /// Human-readable error message.
        message: String,
        /// Where the document came from ("request body", a file path).
        origin: String,
        /// Line number where the error occurred.
        line: Option<usize>,
        /// Column number where the error occurred.
        column: Option<usize>,
    },

    /// Configuration errors.
    Config {
        /// Error code for documentation lookup.
        code: ErrorCode,
        /// Human-readable error message.
        message: String,
        /// Configuration field name, if applicable.
        field: Option<String>,
        /// Configuration file path, if applicable.
        path: Option<PathBuf>,
    },

    /// Internal computation failures.
    Analysis {
        /// Error code for documentation lookup.
        code: ErrorCode,
        /// Human-readable error message.
        message: String,
        /// Optimization phase where the failure occurred.
        phase: Option<OptimizationPhase>,
    },

    /// Input validation errors (may contain multiple issues).
    Validation {
        /// Error code for documentation lookup.
        code: ErrorCode,
        /// Number of validation errors.
        count: usize,
        /// Individual error messages.
        errors: Vec<String>,
    },
}

impl BoundmapError {
    // ==========================================================================
    // Constructor Methods
    // ==========================================================================

    /// Create an I/O error from a std::io::Error.
    #[must_use]
    pub fn from_io_error(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
            std::io::ErrorKind::PermissionDenied => ErrorCode::IO_PERMISSION_DENIED,
            _ => ErrorCode::IO_GENERIC,
        };
        Self::Io {
            code,
            message: err.to_string(),
            path,
            source: Some(Arc::new(err)),
        }
    }

    /// Create a parse error for an empty document.
    #[must_use]
    pub fn empty_input(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self::Parse {
            code: ErrorCode::PARSE_EMPTY,
            message: "a JSON array of service boundaries is required".to_string(),
            origin,
            line: None,
            column: None,
        }
    }

    /// Create a parse error from a serde_json failure.
    #[must_use]
    pub fn from_json_error(err: &serde_json::Error, origin: impl Into<String>) -> Self {
        Self::Parse {
            code: ErrorCode::PARSE_JSON,
            message: err.to_string(),
            origin: origin.into(),
            line: Some(err.line()),
            column: Some(err.column()),
        }
    }

    /// Create a parse error from a TOML failure.
    #[must_use]
    pub fn from_toml_error(err: &toml::de::Error, origin: impl Into<String>) -> Self {
        Self::Parse {
            code: ErrorCode::PARSE_TOML,
            message: err.message().to_string(),
            origin: origin.into(),
            line: None,
            column: None,
        }
    }

    /// Create a configuration error with field context.
    #[must_use]
    pub fn config_with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_INVALID,
            message: message.into(),
            field: Some(field.into()),
            path: None,
        }
    }

    /// Create an analysis error with phase context.
    #[must_use]
    pub fn analysis_with_phase(message: impl Into<String>, phase: OptimizationPhase) -> Self {
        let code = match phase {
            OptimizationPhase::MetricsCalculation | OptimizationPhase::CouplingAnalysis => {
                ErrorCode::ANALYSIS_METRICS
            }
            OptimizationPhase::Transformation => ErrorCode::ANALYSIS_TRANSFORM,
            OptimizationPhase::MigrationPlanning => ErrorCode::ANALYSIS_PLANNING,
            _ => ErrorCode::ANALYSIS_GENERIC,
        };
        Self::Analysis {
            code,
            message: message.into(),
            phase: Some(phase),
        }
    }

    /// Create a validation error with a single message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self::Validation {
            code: ErrorCode::VALIDATION_GENERIC,
            count: 1,
            errors: vec![msg],
        }
    }

    /// Create a validation error with multiple messages.
    #[must_use]
    pub fn validations(code: ErrorCode, errors: Vec<String>) -> Self {
        Self::Validation {
            code,
            count: errors.len(),
            errors,
        }
    }

    // ==========================================================================
    // Accessor Methods
    // ==========================================================================

    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            Self::Config { code, .. } => *code,
            Self::Analysis { code, .. } => *code,
            Self::Validation { code, .. } => *code,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } => "I/O",
            Self::Parse { .. } => "Parse",
            Self::Config { .. } => "Config",
            Self::Analysis { .. } => "Analysis",
            Self::Validation { .. } => "Validation",
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Io { message, .. } => message,
            Self::Parse { message, .. } => message,
            Self::Config { message, .. } => message,
            Self::Analysis { message, .. } => message,
            Self::Validation { errors, .. } => errors.first().map_or("Validation failed", |s| s),
        }
    }

    // ==========================================================================
    // Classification Methods
    // ==========================================================================

    /// Check if this error is something the caller can fix by changing input.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::Validation { .. } | Self::Parse { .. }
        )
    }

    /// HTTP status a transport layer should answer with.
    ///
    /// Malformed or invalid request bodies are client errors; everything else
    /// means the engine failed and maps to 500.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Parse { .. } | Self::Validation { .. } => 400,
            _ => 500,
        }
    }

    /// Get the suggested exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 3,     // Configuration error
            Self::Validation { .. } => 4, // Validation error
            Self::Parse { .. } => 5,      // Parse error
            Self::Analysis { .. } => 1,   // Analysis failed
            Self::Io { .. } => 1,         // I/O error
        }
    }
}

impl std::fmt::Display for BoundmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io {
                code,
                message,
                path,
                ..
            } => {
                write!(f, "[{}] I/O error: {}", code, message)?;
                if let Some(p) = path {
                    write!(f, " (path: {})", p.display())?;
                }
                Ok(())
            }
            Self::Parse {
                code,
                message,
                origin,
                line,
                column,
            } => {
                write!(f, "[{}] Malformed {}: {}", code, origin, message)?;
                if let Some(l) = line {
                    write!(f, " at line {}", l)?;
                    if let Some(c) = column {
                        write!(f, ", column {}", c)?;
                    }
                }
                Ok(())
            }
            Self::Config {
                code,
                message,
                field,
                path,
            } => {
                write!(f, "[{}] Configuration error: {}", code, message)?;
                if let Some(fld) = field {
                    write!(f, " (field: {})", fld)?;
                }
                if let Some(p) = path {
                    write!(f, " (file: {})", p.display())?;
                }
                Ok(())
            }
            Self::Analysis {
                code,
                message,
                phase,
            } => {
                write!(f, "[{}] Analysis error: {}", code, message)?;
                if let Some(ph) = phase {
                    write!(f, " (phase: {})", ph)?;
                }
                Ok(())
            }
            Self::Validation {
                code,
                count,
                errors,
            } => {
                write!(f, "[{}] Validation failed with {} error(s)", code, count)?;
                if *count <= 3 {
                    for (i, err) in errors.iter().enumerate() {
                        write!(f, "\n  {}. {}", i + 1, err)?;
                    }
                } else {
                    for (i, err) in errors.iter().take(2).enumerate() {
                        write!(f, "\n  {}. {}", i + 1, err)?;
                    }
                    write!(f, "\n  ... and {} more", count - 2)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for BoundmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// =============================================================================
// Serde Serialization for Structured Logging
// =============================================================================

impl Serialize for BoundmapError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("BoundmapError", 4)?;
        state.serialize_field("code", &self.code().as_str())?;
        state.serialize_field("category", &self.category())?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("userFixable", &self.is_user_fixable())?;
        state.end()
    }
}

impl From<std::io::Error> for BoundmapError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io_error(err, None)
    }
}

impl From<std::convert::Infallible> for BoundmapError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl From<crate::config::ConfigLoadError> for BoundmapError {
    fn from(err: crate::config::ConfigLoadError) -> Self {
        use crate::config::ConfigLoadError;
        match err {
            ConfigLoadError::Read { path, source } => Self::Config {
                code: ErrorCode::CONFIG_FILE_NOT_FOUND,
                message: source.to_string(),
                field: None,
                path: Some(path),
            },
            ConfigLoadError::Parse { path, source } => {
                Self::from_toml_error(&source, path.display().to_string())
            }
            ConfigLoadError::Invalid { field, reason } => Self::config_with_field(reason, field),
        }
    }
}
