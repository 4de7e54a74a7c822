//! The dispute service: every front-end action as an async call.

use crate::action::Action;
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::fixtures;
use dispute_proceedings::{
    compose_message, prepare_evidence, ArbitratorCase, ArbitratorStats, CaseDraft, CaseEvidence,
    DashboardSummary, EvidenceCounts, EvidenceRepository, ProceedingsError, Profile, VoteSummary,
};
use dispute_query::CaseQuery;
use dispute_store::{next_numeric_id, DisputeStore, FlagStore, MemoryStore, StoreError};
use dispute_types::{
    Ballot, Case, CaseDetail, CaseId, CaseStatus, ChatMessage, Clock, Evidence, PartyAddress,
    SystemClock,
};
use dispute_utils::StatsCounter;
use std::sync::Arc;
use std::time::Duration;

/// Flag key recording that the wallet is connected.
pub const WALLET_FLAG: &str = "walletConnected";

/// Front-end actions over a record store.
///
/// Each call sleeps for the configured latency, then reads or appends to the
/// store. There is no cancellation, retry or de-duplication: two overlapping
/// calls both run to completion.
pub struct DisputeService {
    config: ServiceConfig,
    store: Arc<dyn DisputeStore>,
    flags: Arc<dyn FlagStore>,
    clock: Arc<dyn Clock>,
    wallet: PartyAddress,
    stats: StatsCounter,
}

impl DisputeService {
    pub fn new(
        config: ServiceConfig,
        store: Arc<dyn DisputeStore>,
        flags: Arc<dyn FlagStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let names: Vec<&'static str> = Action::ALL.iter().map(|a| a.as_str()).collect();
        let wallet = PartyAddress::new(config.wallet_address.clone());
        Self {
            config,
            store,
            flags,
            clock,
            wallet,
            stats: StatsCounter::new(&names),
        }
    }

    /// A service over a fresh in-memory store loaded with the mock dataset.
    pub fn with_fixtures(
        config: ServiceConfig,
        flags: Arc<dyn FlagStore>,
    ) -> Result<Self, ServiceError> {
        let store = MemoryStore::new();
        fixtures::seed(&store).map_err(|e| ServiceError::from_store(Action::FetchCases, e))?;
        Ok(Self::new(config, Arc::new(store), flags, Arc::new(SystemClock)))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn wallet_address(&self) -> &PartyAddress {
        &self.wallet
    }

    /// How many times each action has been started.
    pub fn stats(&self) -> &StatsCounter {
        &self.stats
    }

    async fn simulate(&self, action: Action, delay: Duration) {
        self.stats.increment(action.as_str());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn fail(action: Action) -> impl Fn(StoreError) -> ServiceError {
        move |err| {
            let err = ServiceError::from_store(action, err);
            tracing::warn!(%action, error = %err, "action failed");
            err
        }
    }

    fn require_wallet(&self, action: Action) -> Result<(), ServiceError> {
        if self.wallet_connected().map_err(Self::fail(action))? {
            Ok(())
        } else {
            Err(ServiceError::WalletNotConnected { action })
        }
    }

    // ── Cases ──────────────────────────────────────────────────────────

    /// Every case, in listing order.
    pub async fn fetch_cases(&self) -> Result<Vec<Case>, ServiceError> {
        self.simulate(Action::FetchCases, self.config.latency()).await;
        let cases = self.store.list_cases().map_err(Self::fail(Action::FetchCases))?;
        tracing::info!(count = cases.len(), "fetched cases");
        Ok(cases)
    }

    /// Fetch the case list and apply `query` to it.
    pub async fn search_cases(&self, query: &CaseQuery) -> Result<Vec<Case>, ServiceError> {
        let cases = self.fetch_cases().await?;
        Ok(query.apply(&cases))
    }

    pub async fn fetch_case_detail(&self, id: &CaseId) -> Result<CaseDetail, ServiceError> {
        self.simulate(Action::FetchCaseDetail, self.config.latency()).await;
        self.store
            .get_detail(id)
            .map_err(Self::fail(Action::FetchCaseDetail))
    }

    /// File a new case. Requires a connected wallet, which becomes the plaintiff.
    pub async fn create_case(&self, draft: CaseDraft) -> Result<CaseDetail, ServiceError> {
        self.require_wallet(Action::CreateCase)?;
        draft.validate()?;
        self.simulate(Action::CreateCase, self.config.latency()).await;

        let fail = Self::fail(Action::CreateCase);
        let id = self.store.next_case_id().map_err(&fail)?;
        let detail = draft.file(id, &self.wallet, self.clock.now())?;
        self.store.insert_case(&detail).map_err(&fail)?;
        tracing::info!(case = %detail.id(), title = %detail.case.title, "case created");
        Ok(detail)
    }

    // ── Evidence ───────────────────────────────────────────────────────

    /// Evidence for one case, newest first.
    pub async fn fetch_evidence(&self, case: &CaseId) -> Result<Vec<Evidence>, ServiceError> {
        self.simulate(Action::FetchEvidence, self.config.latency()).await;
        self.store
            .list_evidence(case)
            .map_err(Self::fail(Action::FetchEvidence))
    }

    /// Evidence across every case, grouped by case in listing order, with
    /// total, verified and pending counts.
    pub async fn fetch_all_evidence(&self) -> Result<EvidenceRepository, ServiceError> {
        self.simulate(Action::FetchEvidence, self.config.latency()).await;
        self.collect_evidence()
            .map(EvidenceRepository::new)
            .map_err(Self::fail(Action::FetchEvidence))
    }

    fn collect_evidence(&self) -> Result<Vec<CaseEvidence>, StoreError> {
        let mut all = Vec::new();
        for case in self.store.list_cases()? {
            for evidence in self.store.list_evidence(&case.id)? {
                all.push(CaseEvidence {
                    case_id: case.id.clone(),
                    evidence,
                });
            }
        }
        Ok(all)
    }

    /// Attach a description to a case as new evidence from the current wallet.
    pub async fn submit_evidence(
        &self,
        case: &CaseId,
        description: &str,
    ) -> Result<Evidence, ServiceError> {
        if description.trim().is_empty() {
            return Err(ProceedingsError::EmptyEvidence.into());
        }
        self.simulate(Action::SubmitEvidence, self.config.latency()).await;

        let fail = Self::fail(Action::SubmitEvidence);
        let existing = self.store.list_evidence(case).map_err(&fail)?;
        let id = next_numeric_id(existing.iter().map(|e| e.id.as_str())).map_err(&fail)?;
        let evidence = prepare_evidence(case, id, description, &self.wallet, self.clock.now())?;
        self.store.add_evidence(case, &evidence).map_err(&fail)?;
        tracing::info!(case = %case, evidence = %evidence.id, "evidence submitted");
        Ok(evidence)
    }

    // ── Voting ─────────────────────────────────────────────────────────

    pub async fn fetch_votes(&self, case: &CaseId) -> Result<VoteSummary, ServiceError> {
        self.simulate(Action::FetchVotes, Duration::ZERO).await;
        let fail = Self::fail(Action::FetchVotes);
        let tally = self.store.get_tally(case).map_err(&fail)?;
        let has_voted = self.store.has_voted(case, &self.wallet).map_err(&fail)?;
        Ok(VoteSummary::new(tally, has_voted))
    }

    /// Cast the current wallet's ballot. A second vote on the same case is rejected.
    pub async fn submit_vote(
        &self,
        case: &CaseId,
        ballot: Ballot,
    ) -> Result<VoteSummary, ServiceError> {
        let fail = Self::fail(Action::SubmitVote);
        if self.store.has_voted(case, &self.wallet).map_err(&fail)? {
            return Err(ServiceError::AlreadyVoted);
        }
        self.simulate(Action::SubmitVote, self.config.latency()).await;
        let tally = self
            .store
            .record_vote(case, &self.wallet, ballot)
            .map_err(&fail)?;
        tracing::info!(case = %case, %ballot, "vote submitted");
        Ok(VoteSummary::new(tally, true))
    }

    // ── Chat ───────────────────────────────────────────────────────────

    pub async fn fetch_messages(&self, case: &CaseId) -> Result<Vec<ChatMessage>, ServiceError> {
        self.simulate(Action::FetchMessages, Duration::ZERO).await;
        self.store
            .list_messages(case)
            .map_err(Self::fail(Action::FetchMessages))
    }

    /// Post a message. Blank text is ignored and yields `None`.
    pub async fn send_message(
        &self,
        case: &CaseId,
        text: &str,
    ) -> Result<Option<ChatMessage>, ServiceError> {
        self.simulate(Action::SendMessage, Duration::ZERO).await;
        let fail = Self::fail(Action::SendMessage);
        let existing = self.store.list_messages(case).map_err(&fail)?;
        let id = next_numeric_id(existing.iter().map(|m| m.id.as_str())).map_err(&fail)?;
        let Some(message) = compose_message(id, text, self.clock.now()) else {
            return Ok(None);
        };
        self.store.add_message(case, &message).map_err(&fail)?;
        Ok(Some(message))
    }

    // ── Wallet ─────────────────────────────────────────────────────────

    pub fn wallet_connected(&self) -> Result<bool, StoreError> {
        self.flags.is_set(WALLET_FLAG)
    }

    /// Connect the wallet and remember it in the flag store.
    pub async fn connect_wallet(&self) -> Result<PartyAddress, ServiceError> {
        self.simulate(Action::ConnectWallet, self.config.latency()).await;
        self.flags
            .set_flag(WALLET_FLAG, "true")
            .map_err(Self::fail(Action::ConnectWallet))?;
        tracing::info!(address = %self.wallet, "wallet connected");
        Ok(self.wallet.clone())
    }

    pub async fn disconnect_wallet(&self) -> Result<(), ServiceError> {
        self.simulate(Action::DisconnectWallet, Duration::ZERO).await;
        self.flags
            .remove_flag(WALLET_FLAG)
            .map_err(Self::fail(Action::DisconnectWallet))?;
        tracing::info!(address = %self.wallet, "wallet disconnected");
        Ok(())
    }

    // ── Arbitrator ─────────────────────────────────────────────────────

    /// Arbitrator statistics. Only available with a connected wallet.
    pub async fn fetch_arbitrator_stats(&self) -> Result<ArbitratorStats, ServiceError> {
        self.require_wallet(Action::FetchArbitratorData)?;
        self.simulate(Action::FetchArbitratorData, self.config.dashboard_latency())
            .await;
        Ok(fixtures::arbitrator_stats())
    }

    /// Cases waiting for review.
    pub async fn fetch_pending_assignments(&self) -> Result<Vec<ArbitratorCase>, ServiceError> {
        self.simulate(Action::FetchArbitratorData, Duration::ZERO).await;
        Ok(fixtures::pending_assignments())
    }

    /// Request more stake. Returns the acknowledgement shown to the user.
    pub async fn stake_more(&self, amount: &str) -> Result<String, ServiceError> {
        self.require_wallet(Action::StakeMore)?;
        self.simulate(Action::StakeMore, self.config.latency()).await;
        tracing::info!(amount, "staking initiated");
        Ok("Staking initiated".to_string())
    }

    /// Request a withdrawal of earnings. Returns the acknowledgement shown to the user.
    pub async fn withdraw_earnings(&self) -> Result<String, ServiceError> {
        self.require_wallet(Action::WithdrawEarnings)?;
        self.simulate(Action::WithdrawEarnings, self.config.latency()).await;
        tracing::info!("withdrawal initiated");
        Ok("Withdrawal initiated".to_string())
    }

    // ── Dashboard ──────────────────────────────────────────────────────

    /// Headline counts computed from the store plus the activity feed.
    pub async fn refresh_dashboard(&self) -> Result<DashboardSummary, ServiceError> {
        self.simulate(Action::RefreshDashboard, self.config.latency()).await;
        let fail = Self::fail(Action::RefreshDashboard);
        let cases = self.store.list_cases().map_err(&fail)?;
        let active_cases = cases
            .iter()
            .filter(|c| c.status == CaseStatus::Active)
            .count();
        let evidence = self.collect_evidence().map_err(&fail)?;
        let counts = EvidenceCounts::of(evidence.iter().map(|item| &item.evidence));
        Ok(DashboardSummary {
            active_cases,
            pending_evidence: counts.pending,
            total_staked: fixtures::total_staked(),
            recent_activity: fixtures::recent_activity(),
        })
    }

    pub async fn fetch_profile(&self) -> Result<Profile, ServiceError> {
        self.simulate(Action::FetchProfile, Duration::ZERO).await;
        Ok(fixtures::profile(self.wallet.clone()))
    }
}
