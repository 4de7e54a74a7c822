//! `dispute`: command-line front-end for the dispute resolution core.

mod render;

use anyhow::Context;
use clap::Parser;
use dispute_proceedings::CaseDraft;
use dispute_query::SearchMode;
use dispute_service::{CaseBrowser, DisputeService, ServiceConfig, ServiceError};
use dispute_store::FileFlagStore;
use dispute_types::{Ballot, CaseId, StatusFilter};
use dispute_utils::LogFormat;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "dispute", about = "Browse and act on dispute resolution cases")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "DISPUTE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the wallet flag file.
    #[arg(long, env = "DISPUTE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Simulated latency of each action, in milliseconds.
    #[arg(long, env = "DISPUTE_LATENCY_MS")]
    latency_ms: Option<u64>,

    /// Wallet address used as plaintiff, submitter and voter.
    #[arg(long, env = "DISPUTE_WALLET")]
    wallet: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "DISPUTE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "DISPUTE_LOG_FORMAT")]
    log_format: Option<String>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List, search and inspect cases.
    Cases {
        #[command(subcommand)]
        action: CasesAction,
    },
    /// View or submit evidence for a case.
    Evidence {
        #[command(subcommand)]
        action: EvidenceAction,
    },
    /// View or cast votes on a case.
    Vote {
        #[command(subcommand)]
        action: VoteAction,
    },
    /// Read or post to a case's chat.
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// File a new case (requires a connected wallet).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        defendant: Option<String>,
        #[arg(long)]
        stake: Option<String>,
    },
    /// Connect, disconnect or inspect the wallet.
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },
    /// Arbitrator statistics and pending reviews.
    Arbitrator {
        #[command(subcommand)]
        action: ArbitratorAction,
    },
    /// Headline numbers and recent activity.
    Dashboard,
    /// The connected user's profile.
    Profile,
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(clap::Subcommand)]
enum CasesAction {
    /// List cases matching a search and status selector.
    List {
        /// Case-insensitive title substring.
        #[arg(long, short, default_value = "")]
        query: String,
        /// ALL, PENDING, ACTIVE, RESOLVED or CLOSED.
        #[arg(long, short, default_value = "ALL")]
        status: StatusFilter,
        /// Also match the query against case ids.
        #[arg(long)]
        match_id: bool,
    },
    /// Show one case with its summary and timeline.
    Show { id: String },
}

#[derive(clap::Subcommand)]
enum EvidenceAction {
    /// Evidence for one case, or for every case when none is given.
    List { case: Option<String> },
    /// Submit a description as new evidence.
    Submit { case: String, description: String },
}

#[derive(clap::Subcommand)]
enum VoteAction {
    Show { case: String },
    /// Cast "for" or "against".
    Cast { case: String, ballot: Ballot },
}

#[derive(clap::Subcommand)]
enum ChatAction {
    List { case: String },
    Send { case: String, text: String },
}

#[derive(clap::Subcommand)]
enum WalletAction {
    Connect,
    Disconnect,
    Status,
}

#[derive(clap::Subcommand)]
enum ArbitratorAction {
    Stats,
    Pending,
    /// Stake more (requires a connected wallet).
    Stake { amount: String },
    /// Withdraw earnings (requires a connected wallet).
    Withdraw,
}

/// Merge the optional config file with CLI flags and env vars.
fn resolve_config(cli: &Cli) -> anyhow::Result<ServiceConfig> {
    let base = match &cli.config {
        Some(path) => ServiceConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    Ok(ServiceConfig {
        data_dir: cli.data_dir.clone().unwrap_or(base.data_dir),
        latency_ms: cli.latency_ms.unwrap_or(base.latency_ms),
        dashboard_latency_ms: cli
            .latency_ms
            .map(|ms| ms.saturating_mul(3) / 2)
            .unwrap_or(base.dashboard_latency_ms),
        wallet_address: cli.wallet.clone().unwrap_or(base.wallet_address),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
        log_format: cli.log_format.clone().unwrap_or(base.log_format),
    })
}

/// Log the full error and turn it into the user-facing alert text.
fn alert(err: ServiceError) -> anyhow::Error {
    tracing::debug!(error = ?err, "action failed");
    anyhow::anyhow!("{}", err.alert())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let log_format = config.log_format.parse::<LogFormat>().unwrap_or_default();
    dispute_utils::init_tracing(&config.log_level, log_format);

    if let Some(path) = &cli.config {
        tracing::info!("loaded config from {}", path.display());
    }

    let flags = Arc::new(FileFlagStore::in_dir(&config.data_dir));
    let service = Arc::new(DisputeService::with_fixtures(config, flags).map_err(alert)?);
    let json = cli.json;

    match cli.command {
        Command::Cases { action } => match action {
            CasesAction::List {
                query,
                status,
                match_id,
            } => {
                let mode = if match_id {
                    SearchMode::TitleOrId
                } else {
                    SearchMode::Title
                };
                let mut browser = CaseBrowser::new(Arc::clone(&service)).with_mode(mode);
                browser.load().await.map_err(alert)?;
                browser.set_query(query);
                browser.set_filter(status);
                render::cases(json, &browser.visible())?;
            }
            CasesAction::Show { id } => {
                let detail = service
                    .fetch_case_detail(&CaseId::from(id))
                    .await
                    .map_err(alert)?;
                render::case_detail(json, &detail)?;
            }
        },
        Command::Evidence { action } => match action {
            EvidenceAction::List { case: Some(case) } => {
                let items = service
                    .fetch_evidence(&CaseId::from(case))
                    .await
                    .map_err(alert)?;
                render::evidence_list(json, &items)?;
            }
            EvidenceAction::List { case: None } => {
                let repository = service.fetch_all_evidence().await.map_err(alert)?;
                render::evidence_repository(json, &repository)?;
            }
            EvidenceAction::Submit { case, description } => {
                let item = service
                    .submit_evidence(&CaseId::from(case), &description)
                    .await
                    .map_err(alert)?;
                render::notice(json, &item, "Evidence submitted successfully")?;
            }
        },
        Command::Vote { action } => match action {
            VoteAction::Show { case } => {
                let summary = service
                    .fetch_votes(&CaseId::from(case))
                    .await
                    .map_err(alert)?;
                render::votes(json, &summary)?;
            }
            VoteAction::Cast { case, ballot } => {
                let summary = service
                    .submit_vote(&CaseId::from(case), ballot)
                    .await
                    .map_err(alert)?;
                render::notice(json, &summary, "Your vote has been submitted")?;
                render::votes(json, &summary)?;
            }
        },
        Command::Chat { action } => match action {
            ChatAction::List { case } => {
                let messages = service
                    .fetch_messages(&CaseId::from(case))
                    .await
                    .map_err(alert)?;
                render::messages(json, &messages)?;
            }
            ChatAction::Send { case, text } => {
                let sent = service
                    .send_message(&CaseId::from(case), &text)
                    .await
                    .map_err(alert)?;
                match sent {
                    Some(message) => render::messages(json, &[message])?,
                    None => tracing::info!("empty message not sent"),
                }
            }
        },
        Command::Create {
            title,
            description,
            defendant,
            stake,
        } => {
            let draft = CaseDraft {
                title,
                description,
                defendant,
                stake,
            };
            let detail = service.create_case(draft).await.map_err(alert)?;
            render::notice(json, &detail, "Case created successfully")?;
        }
        Command::Wallet { action } => match action {
            WalletAction::Connect => {
                let address = service.connect_wallet().await.map_err(alert)?;
                render::notice(json, &address, "Wallet connected successfully")?;
            }
            WalletAction::Disconnect => {
                service.disconnect_wallet().await.map_err(alert)?;
                render::notice(json, &false, "Wallet disconnected successfully")?;
            }
            WalletAction::Status => {
                let connected = service
                    .wallet_connected()
                    .context("reading wallet flag")?;
                render::wallet_status(json, service.wallet_address(), connected)?;
            }
        },
        Command::Arbitrator { action } => match action {
            ArbitratorAction::Stats => {
                let stats = service.fetch_arbitrator_stats().await.map_err(alert)?;
                render::arbitrator_stats(json, &stats)?;
            }
            ArbitratorAction::Pending => {
                let pending = service.fetch_pending_assignments().await.map_err(alert)?;
                render::pending_assignments(json, &pending)?;
            }
            ArbitratorAction::Stake { amount } => {
                let ack = service.stake_more(&amount).await.map_err(alert)?;
                render::notice(json, &ack, &ack)?;
            }
            ArbitratorAction::Withdraw => {
                let ack = service.withdraw_earnings().await.map_err(alert)?;
                render::notice(json, &ack, &ack)?;
            }
        },
        Command::Dashboard => {
            let summary = service.refresh_dashboard().await.map_err(alert)?;
            render::dashboard(json, &summary)?;
        }
        Command::Profile => {
            let profile = service.fetch_profile().await.map_err(alert)?;
            render::profile(json, &profile)?;
        }
        Command::Config => {
            print!("{}", service.config().to_toml_string().map_err(alert)?);
        }
    }

    tracing::debug!(stats = ?service.stats().snapshot(), "done");
    Ok(())
}
