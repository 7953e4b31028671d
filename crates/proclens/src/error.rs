use thiserror::Error;

/// Errors surfaced by process scanning.
///
/// Per-process conditions (exited, unprivileged, moduleless) are never
/// errors and appear as absent names instead; only capability-level and
/// defensive-bound conditions reach callers.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("process inspection is unavailable on this host: {0}")]
    CapabilityUnavailable(String),

    #[error("process id buffer still exactly full at {capacity} entries")]
    EnumerationGrowthExceeded { capacity: usize },

    #[error("failed to enumerate processes: {0}")]
    ProcessEnumeration(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
