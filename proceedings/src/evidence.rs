//! Evidence submission.

use crate::error::ProceedingsError;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use dispute_types::{
    CaseId, Evidence, EvidenceKind, EvidenceStatus, PartyAddress, Timestamp,
};
use serde::{Deserialize, Serialize};

type Blake2b256 = Blake2b<U32>;

/// Content hash of a submission: `0x` followed by 64 hex digits.
///
/// Covers the case id, the description and the submission time.
pub fn evidence_hash(case: &CaseId, description: &str, at: Timestamp) -> String {
    let mut hasher = Blake2b256::new();
    hasher.update(case.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(description.as_bytes());
    hasher.update(at.as_secs().to_le_bytes());
    format!("0x{}", hex::encode(hasher.finalize()))
}

/// Abbreviate a long hash for display, e.g. `0xabcdef...123456`.
pub fn short_hash(hash: &str) -> String {
    let body = hash.strip_prefix("0x").unwrap_or(hash);
    if body.len() <= 12 || !body.is_ascii() {
        return hash.to_string();
    }
    format!("0x{}...{}", &body[..6], &body[body.len() - 6..])
}

/// Build a new evidence record from a free-text description.
///
/// The description is trimmed and must not be empty. New evidence is a
/// pending document whose title is its description.
pub fn prepare_evidence(
    case: &CaseId,
    id: impl Into<String>,
    description: &str,
    submitted_by: &PartyAddress,
    at: Timestamp,
) -> Result<Evidence, ProceedingsError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ProceedingsError::EmptyEvidence);
    }
    Ok(Evidence {
        id: id.into(),
        kind: EvidenceKind::Document,
        title: description.to_string(),
        description: description.to_string(),
        submitted_by: submitted_by.clone(),
        timestamp: at.datetime_string(),
        hash: evidence_hash(case, description, at),
        status: EvidenceStatus::Pending,
    })
}

/// Header numbers of the evidence repository.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceCounts {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
}

impl EvidenceCounts {
    pub fn of<'a>(items: impl IntoIterator<Item = &'a Evidence>) -> Self {
        items.into_iter().fold(Self::default(), |mut counts, item| {
            counts.total += 1;
            match item.status {
                EvidenceStatus::Verified => counts.verified += 1,
                EvidenceStatus::Pending => counts.pending += 1,
            }
            counts
        })
    }
}

/// A piece of evidence labelled with the case it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseEvidence {
    pub case_id: CaseId,
    #[serde(flatten)]
    pub evidence: Evidence,
}

/// Evidence across every case, with its header counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRepository {
    pub counts: EvidenceCounts,
    pub items: Vec<CaseEvidence>,
}

impl EvidenceRepository {
    pub fn new(items: Vec<CaseEvidence>) -> Self {
        let counts = EvidenceCounts::of(items.iter().map(|item| &item.evidence));
        Self { counts, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAR_15_1430: u64 = 1_710_513_000;

    #[test]
    fn blank_description_is_rejected() {
        let err = prepare_evidence(
            &CaseId::from("1"),
            "3",
            "   \n",
            &"0x1234...5678".into(),
            Timestamp::new(MAR_15_1430),
        )
        .unwrap_err();
        assert_eq!(err, ProceedingsError::EmptyEvidence);
        assert_eq!(err.to_string(), "Please enter evidence description");
    }

    #[test]
    fn new_evidence_is_a_pending_document() {
        let evidence = prepare_evidence(
            &CaseId::from("1"),
            "3",
            "  Signed invoice ",
            &"0x1234...5678".into(),
            Timestamp::new(MAR_15_1430),
        )
        .unwrap();
        assert_eq!(evidence.kind, EvidenceKind::Document);
        assert_eq!(evidence.status, EvidenceStatus::Pending);
        assert_eq!(evidence.title, "Signed invoice");
        assert_eq!(evidence.description, "Signed invoice");
        assert_eq!(evidence.timestamp, "2024-03-15 14:30");
        assert_eq!(evidence.submitted_by.as_str(), "0x1234...5678");
    }

    #[test]
    fn hash_is_prefixed_hex() {
        let hash = evidence_hash(&CaseId::from("1"), "contract", Timestamp::new(1));
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 66);
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hash_depends_on_every_input() {
        let base = evidence_hash(&CaseId::from("1"), "contract", Timestamp::new(1));
        assert_eq!(base, evidence_hash(&CaseId::from("1"), "contract", Timestamp::new(1)));
        assert_ne!(base, evidence_hash(&CaseId::from("2"), "contract", Timestamp::new(1)));
        assert_ne!(base, evidence_hash(&CaseId::from("1"), "receipt", Timestamp::new(1)));
        assert_ne!(base, evidence_hash(&CaseId::from("1"), "contract", Timestamp::new(2)));
    }

    #[test]
    fn short_hash_keeps_short_values() {
        assert_eq!(short_hash("0xabc...def"), "0xabc...def");
        let long = format!("0x{}", "ab".repeat(32));
        assert_eq!(short_hash(&long), "0xababab...ababab");
    }

    #[test]
    fn repository_counts_by_status() {
        let at = Timestamp::new(MAR_15_1430);
        let submitter = PartyAddress::from("0x1234...5678");
        let mut verified =
            prepare_evidence(&CaseId::from("1"), "1", "contract", &submitter, at).unwrap();
        verified.status = EvidenceStatus::Verified;
        let pending =
            prepare_evidence(&CaseId::from("2"), "1", "receipt", &submitter, at).unwrap();

        let repository = EvidenceRepository::new(vec![
            CaseEvidence {
                case_id: CaseId::from("1"),
                evidence: verified,
            },
            CaseEvidence {
                case_id: CaseId::from("2"),
                evidence: pending,
            },
        ]);
        assert_eq!(
            repository.counts,
            EvidenceCounts {
                total: 2,
                verified: 1,
                pending: 1,
            }
        );
        assert_eq!(EvidenceCounts::of(std::iter::empty()), EvidenceCounts::default());
    }
}
