use crate::action::Action;
use dispute_proceedings::ProceedingsError;
use dispute_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] ProceedingsError),

    #[error("You have already voted")]
    AlreadyVoted,

    #[error("{action}: wallet not connected")]
    WalletNotConnected { action: Action },

    #[error("{action}: case {id} not found")]
    CaseNotFound { action: Action, id: String },

    #[error("{action} failed: {source}")]
    Failed {
        action: Action,
        #[source]
        source: StoreError,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Classify a storage failure raised while performing `action`.
    pub fn from_store(action: Action, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => Self::CaseNotFound {
                action,
                id: key.trim_start_matches("case ").to_string(),
            },
            StoreError::AlreadyVoted { .. } => Self::AlreadyVoted,
            source => Self::Failed { action, source },
        }
    }

    /// The text to show the user in an alert.
    pub fn alert(&self) -> String {
        match self {
            Self::CaseNotFound { action, .. } | Self::Failed { action, .. } => {
                action.failure_message().to_string()
            }
            Self::WalletNotConnected {
                action: Action::CreateCase,
            } => "Please connect your wallet first to create a case".to_string(),
            Self::WalletNotConnected { .. } => "Please connect your wallet first".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_get_generic_alerts() {
        let err = ServiceError::from_store(
            Action::SubmitVote,
            StoreError::Backend("disk on fire".into()),
        );
        assert_eq!(err.alert(), "Failed to submit vote");
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn not_found_keeps_the_id() {
        let err = ServiceError::from_store(
            Action::FetchCaseDetail,
            StoreError::NotFound("case 42".into()),
        );
        match &err {
            ServiceError::CaseNotFound { id, .. } => assert_eq!(id, "42"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.alert(), "Failed to load case details.");
    }

    #[test]
    fn validation_errors_keep_their_text() {
        let err = ServiceError::from(ProceedingsError::EmptyEvidence);
        assert_eq!(err.alert(), "Please enter evidence description");
        let err = ServiceError::from_store(
            Action::SubmitVote,
            StoreError::AlreadyVoted {
                case: "1".into(),
                voter: "0x1".into(),
            },
        );
        assert_eq!(err.alert(), "You have already voted");
    }

    #[test]
    fn wallet_alert_mentions_case_creation_only_when_creating() {
        let create = ServiceError::WalletNotConnected {
            action: Action::CreateCase,
        };
        assert_eq!(
            create.alert(),
            "Please connect your wallet first to create a case"
        );
        let stats = ServiceError::WalletNotConnected {
            action: Action::FetchArbitratorData,
        };
        assert_eq!(stats.alert(), "Please connect your wallet first");
    }
}
