use thiserror::Error;

/// Unified error type for the entire folio-dashboard-core library.
///
/// Deriving a view never fails; these errors come from parsing user input
/// (column names, sort directions, settings) and from export/validation paths.
#[derive(Debug, Error)]
pub enum DashboardError {
    // ── Query input ─────────────────────────────────────────────────
    #[error("Unknown field '{field}' for dataset {dataset}")]
    UnknownField { dataset: String, field: String },

    #[error("Invalid sort direction: {0} (expected 'asc' or 'desc')")]
    InvalidSortDirection(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Domain ──────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DashboardError {
    pub fn unknown_field(dataset: impl Into<String>, field: impl Into<String>) -> Self {
        DashboardError::UnknownField {
            dataset: dataset.into(),
            field: field.into(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Deserialization(e.to_string())
    }
}
