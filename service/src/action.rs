//! The named actions a front-end can invoke.

use std::fmt;

/// A user-facing action. Used for stats, logs and failure messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    FetchCases,
    FetchCaseDetail,
    FetchEvidence,
    SubmitEvidence,
    FetchVotes,
    SubmitVote,
    FetchMessages,
    SendMessage,
    CreateCase,
    ConnectWallet,
    DisconnectWallet,
    FetchArbitratorData,
    StakeMore,
    WithdrawEarnings,
    RefreshDashboard,
    FetchProfile,
}

impl Action {
    pub const ALL: [Action; 16] = [
        Action::FetchCases,
        Action::FetchCaseDetail,
        Action::FetchEvidence,
        Action::SubmitEvidence,
        Action::FetchVotes,
        Action::SubmitVote,
        Action::FetchMessages,
        Action::SendMessage,
        Action::CreateCase,
        Action::ConnectWallet,
        Action::DisconnectWallet,
        Action::FetchArbitratorData,
        Action::StakeMore,
        Action::WithdrawEarnings,
        Action::RefreshDashboard,
        Action::FetchProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchCases => "fetch_cases",
            Self::FetchCaseDetail => "fetch_case_detail",
            Self::FetchEvidence => "fetch_evidence",
            Self::SubmitEvidence => "submit_evidence",
            Self::FetchVotes => "fetch_votes",
            Self::SubmitVote => "submit_vote",
            Self::FetchMessages => "fetch_messages",
            Self::SendMessage => "send_message",
            Self::CreateCase => "create_case",
            Self::ConnectWallet => "connect_wallet",
            Self::DisconnectWallet => "disconnect_wallet",
            Self::FetchArbitratorData => "fetch_arbitrator_data",
            Self::StakeMore => "stake_more",
            Self::WithdrawEarnings => "withdraw_earnings",
            Self::RefreshDashboard => "refresh_dashboard",
            Self::FetchProfile => "fetch_profile",
        }
    }

    /// The generic alert shown when the action fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::FetchCases => "Failed to load cases",
            Self::FetchCaseDetail => "Failed to load case details.",
            Self::FetchEvidence => "Failed to load evidence",
            Self::SubmitEvidence => "Failed to submit evidence",
            Self::FetchVotes => "Failed to fetch voting data",
            Self::SubmitVote => "Failed to submit vote",
            Self::FetchMessages => "Failed to fetch messages",
            Self::SendMessage => "Failed to send message",
            Self::CreateCase => "Failed to create case",
            Self::ConnectWallet => "Failed to connect wallet",
            Self::DisconnectWallet => "Failed to disconnect wallet",
            Self::FetchArbitratorData => "Failed to fetch arbitrator data",
            Self::StakeMore => "Failed to initiate staking",
            Self::WithdrawEarnings => "Failed to initiate withdrawal",
            Self::RefreshDashboard => "Failed to refresh dashboard",
            Self::FetchProfile => "Failed to load profile",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
