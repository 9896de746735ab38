//! Error types for view registration, construction and presentation.

/// Errors raised by the page registry, the view factory and the presenters.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Page already registered with name: {0}")]
    DuplicateName(String),

    #[error("View factory already registered for id: {0}")]
    DuplicateView(String),

    #[error("View '{0}' is not a renderable view")]
    Capability(String),

    #[error("View not found for path: {0}")]
    NotFound(String),

    #[error("Failed to create view: {view}")]
    Construction {
        view: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Dialog content '{view}' is not a {expected} dialog")]
    Configuration { view: String, expected: &'static str },

    #[error("Invalid view")]
    InvalidView,
}

/// Errors raised while interpreting game data records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameDataError {
    #[error("Unable to find ClassJob: {0:#x}")]
    UnknownClassJob(u64),
}
