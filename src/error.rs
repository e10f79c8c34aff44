// ==========================================
// Core error taxonomy
// ==========================================
// Fatal variants abort an invocation outright; everything non-fatal is
// represented as data (Warning, in diagnostics.rs) rather than as an error
// variant, so it can flow through downstream engines untouched.
// ==========================================

use thiserror::Error;

/// Top-level error type returned by engine entry points and the orchestrator.
#[derive(Error, Debug)]
pub enum CoreError {
    // ===== Fatal: inbound contract violations =====
    #[error("schema mismatch in frame `{frame}`: missing columns {missing:?}")]
    SchemaMismatch { frame: String, missing: Vec<String> },

    // ===== Fatal: configuration =====
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    // ===== Raised (not just warned) from single-item query entry points =====
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
