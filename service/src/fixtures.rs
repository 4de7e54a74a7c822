//! The mock dataset every fresh service starts from.

use dispute_proceedings::{
    Activity, ActivityKind, ArbitratorCase, ArbitratorStats, Complexity, Profile,
};
use dispute_store::{DisputeStore, StoreError};
use dispute_types::{
    Case, CaseDetail, CaseId, CaseStatus, ChatMessage, Evidence, EvidenceKind, EvidenceStatus,
    Parties, PartyAddress, TimelineEntry, VoteTally,
};

const HOUR: u64 = 3600;

fn case(
    id: &str,
    title: &str,
    status: CaseStatus,
    created_at: &str,
    stake: &str,
    plaintiff: &str,
    defendant: &str,
) -> Case {
    Case {
        id: CaseId::from(id),
        title: title.to_string(),
        status,
        created_at: created_at.to_string(),
        stake: stake.to_string(),
        parties: Parties {
            plaintiff: PartyAddress::from(plaintiff),
            defendant: PartyAddress::from(defendant),
        },
    }
}

/// The seeded cases with their summaries and timelines, in listing order.
pub fn case_details() -> Vec<CaseDetail> {
    vec![
        CaseDetail {
            case: case(
                "1",
                "Smart Contract Dispute #123",
                CaseStatus::Pending,
                "2024-03-15",
                "2.5 ETH",
                "0x1234...5678",
                "0x8765...4321",
            ),
            summary: "Dispute regarding smart contract execution and payment terms.".into(),
            timeline: vec![
                TimelineEntry::new("2024-03-15", "Case Created"),
                TimelineEntry::new("2024-03-16", "Evidence Submitted"),
            ],
        },
        CaseDetail {
            case: case(
                "2",
                "NFT Ownership Dispute",
                CaseStatus::Active,
                "2024-03-14",
                "1.0 ETH",
                "0x2345...6789",
                "0x9876...5432",
            ),
            summary: "Competing ownership claims over a transferred NFT.".into(),
            timeline: vec![
                TimelineEntry::new("2024-03-14", "Case Created"),
                TimelineEntry::new("2024-03-15", "Arbitrator Assigned"),
            ],
        },
        CaseDetail {
            case: case(
                "3",
                "DeFi Protocol Dispute",
                CaseStatus::Resolved,
                "2024-03-13",
                "5.0 ETH",
                "0x3456...7890",
                "0x0987...6543",
            ),
            summary: "Liquidation losses attributed to a faulty price oracle.".into(),
            timeline: vec![
                TimelineEntry::new("2024-03-13", "Case Created"),
                TimelineEntry::new("2024-03-14", "Evidence Submitted"),
                TimelineEntry::new("2024-03-18", "Ruling Issued"),
            ],
        },
    ]
}

/// Seeded evidence per case, oldest first.
pub fn case_evidence() -> Vec<(CaseId, Evidence)> {
    vec![
        (
            CaseId::from("1"),
            Evidence {
                id: "1".into(),
                kind: EvidenceKind::Document,
                title: "Original Contract".into(),
                description: "Signed contract between parties".into(),
                submitted_by: PartyAddress::from("0x1234...5678"),
                timestamp: "2024-03-15 14:30".into(),
                hash: "0xabc...def".into(),
                status: EvidenceStatus::Verified,
            },
        ),
        (
            CaseId::from("1"),
            Evidence {
                id: "2".into(),
                kind: EvidenceKind::Image,
                title: "Payment Receipt".into(),
                description: "Transaction proof".into(),
                submitted_by: PartyAddress::from("0x8765...4321"),
                timestamp: "2024-03-16 09:15".into(),
                hash: "0xfed...cba".into(),
                status: EvidenceStatus::Pending,
            },
        ),
        (
            CaseId::from("3"),
            Evidence {
                id: "3".into(),
                kind: EvidenceKind::Document,
                title: "Oracle Price Feed Export".into(),
                description: "Price history around the liquidation block".into(),
                submitted_by: PartyAddress::from("0x3456...7890"),
                timestamp: "2024-03-14 11:00".into(),
                hash: "0x0ac...e19".into(),
                status: EvidenceStatus::Verified,
            },
        ),
    ]
}

/// Seeded chat messages, oldest first. Every case starts with the same thread.
pub fn chat_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: "1".into(),
            sender: "Alice".into(),
            text: "Hello, I have a question about the contract.".into(),
            timestamp: "2024-03-15 10:00".into(),
        },
        ChatMessage {
            id: "2".into(),
            sender: "Bob".into(),
            text: "Sure, what would you like to know?".into(),
            timestamp: "2024-03-15 10:05".into(),
        },
    ]
}

/// Every case starts with this tally.
pub fn initial_tally() -> VoteTally {
    VoteTally::new(10, 5)
}

/// Load the mock dataset into `store`.
pub fn seed(store: &dyn DisputeStore) -> Result<(), StoreError> {
    for detail in case_details() {
        store.insert_case(&detail)?;
        store.put_tally(detail.id(), initial_tally())?;
        for message in chat_messages() {
            store.add_message(detail.id(), &message)?;
        }
    }
    for (case, item) in case_evidence() {
        store.add_evidence(&case, &item)?;
    }
    tracing::debug!(cases = store.case_count()?, "seeded mock dataset");
    Ok(())
}

pub fn arbitrator_stats() -> ArbitratorStats {
    ArbitratorStats {
        total_cases: 45,
        active_cases: 3,
        completed_cases: 42,
        success_rate: 98,
        staked_amount: "5.5 ETH".into(),
        earnings: "12.3 ETH".into(),
    }
}

/// Cases waiting for an arbitrator, most recently filed first.
pub fn pending_assignments() -> Vec<ArbitratorCase> {
    vec![
        ArbitratorCase {
            id: CaseId::from("1"),
            title: "Smart Contract Dispute #123".into(),
            amount: "0.5 ETH".into(),
            created: "2024-03-15".into(),
            description: "Contract execution dispute between two parties".into(),
            complexity: Complexity::Medium,
            time_left_secs: 48 * HOUR,
        },
        ArbitratorCase {
            id: CaseId::from("2"),
            title: "Payment Dispute #456".into(),
            amount: "1.2 ETH".into(),
            created: "2024-03-14".into(),
            description: "Payment settlement dispute for services rendered".into(),
            complexity: Complexity::High,
            time_left_secs: 24 * HOUR,
        },
        ArbitratorCase {
            id: CaseId::from("3"),
            title: "NFT Ownership Dispute #789".into(),
            amount: "2.0 ETH".into(),
            created: "2024-03-13".into(),
            description: "NFT ownership and rights dispute".into(),
            complexity: Complexity::Low,
            time_left_secs: 72 * HOUR,
        },
    ]
}

pub fn total_staked() -> String {
    "2.5 ETH".to_string()
}

pub fn recent_activity() -> Vec<Activity> {
    let entry = |id, kind, message: &str, age: &str| Activity {
        id,
        kind,
        message: message.to_string(),
        age: age.to_string(),
    };
    vec![
        entry(1, ActivityKind::CaseCreated, "New case #123 created", "2h ago"),
        entry(
            2,
            ActivityKind::EvidenceSubmitted,
            "Evidence submitted for case #120",
            "3h ago",
        ),
        entry(
            3,
            ActivityKind::CaseResolved,
            "Case #119 resolved successfully",
            "5h ago",
        ),
        entry(4, ActivityKind::StakeAdded, "Added 1.0 ETH to stake", "1d ago"),
    ]
}

pub fn profile(address: PartyAddress) -> Profile {
    Profile {
        address,
        ens_name: "user.eth".into(),
        total_cases: 12,
        reputation: 4.8,
        joined_date: "May 2023".into(),
    }
}
