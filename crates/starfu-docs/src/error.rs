//! Error types for the docs core.

/// Error returned when looking up sections.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// The requested section id matches no configured branch.
    #[error("Section not configured: {0}")]
    SectionNotConfigured(String),
}
