use thiserror::Error;

/// Rejections of user input. The messages are shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProceedingsError {
    #[error("Please enter evidence description")]
    EmptyEvidence,

    #[error("Please fill in all fields")]
    IncompleteDraft,
}
