use companion_core::ContextError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("Not signed in. Run `companion sign-in <email>` first")]
    NotSignedIn,

    #[error("No experience with id {0}")]
    UnknownExperience(String),

    #[error("No companion with id {0}")]
    UnknownCompanion(String),

    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
