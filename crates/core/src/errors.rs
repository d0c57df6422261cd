use thiserror::Error;

/// Unified error type for the finance-tracker-core library.
///
/// Store mutations never fail; only the edges that parse or validate
/// external input (snapshots, enum values, settings) return this.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Snapshot (de)serialization ──────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Input ───────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },
}

impl CoreError {
    pub(crate) fn invalid_value(field: &str, value: &str) -> Self {
        CoreError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
