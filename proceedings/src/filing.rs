//! Filing a new case.

use crate::error::ProceedingsError;
use dispute_types::{
    Case, CaseDetail, CaseId, CaseStatus, Parties, PartyAddress, TimelineEntry, Timestamp,
};
use serde::{Deserialize, Serialize};

const UNASSIGNED_DEFENDANT: &str = "unassigned";
const DEFAULT_STAKE: &str = "0 ETH";

/// What a user fills in to open a case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub defendant: Option<String>,
    #[serde(default)]
    pub stake: Option<String>,
}

impl CaseDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_defendant(mut self, defendant: impl Into<String>) -> Self {
        self.defendant = Some(defendant.into());
        self
    }

    pub fn with_stake(mut self, stake: impl Into<String>) -> Self {
        self.stake = Some(stake.into());
        self
    }

    /// Both title and description must be non-blank.
    pub fn validate(&self) -> Result<(), ProceedingsError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ProceedingsError::IncompleteDraft);
        }
        Ok(())
    }

    /// Turn the draft into a freshly filed case.
    ///
    /// New cases are always `PENDING` and dated `filed_at` (UTC calendar day).
    pub fn file(
        self,
        id: CaseId,
        plaintiff: &PartyAddress,
        filed_at: Timestamp,
    ) -> Result<CaseDetail, ProceedingsError> {
        self.validate()?;
        let date = filed_at.date_string();
        let defendant = non_blank(self.defendant).unwrap_or_else(|| UNASSIGNED_DEFENDANT.into());
        let stake = non_blank(self.stake).unwrap_or_else(|| DEFAULT_STAKE.into());
        Ok(CaseDetail {
            case: Case {
                id,
                title: self.title.trim().to_string(),
                status: CaseStatus::Pending,
                created_at: date.clone(),
                stake,
                parties: Parties {
                    plaintiff: plaintiff.clone(),
                    defendant: PartyAddress::new(defendant),
                },
            },
            summary: self.description.trim().to_string(),
            timeline: vec![TimelineEntry::new(date, "Case Created")],
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAR_15: u64 = 1_710_460_800;

    #[test]
    fn missing_fields_are_rejected() {
        let plaintiff = PartyAddress::from("0x1234...5678");
        for draft in [
            CaseDraft::new("", "desc"),
            CaseDraft::new("title", ""),
            CaseDraft::new("  ", "  "),
        ] {
            let err = draft
                .file(CaseId::from("4"), &plaintiff, Timestamp::new(MAR_15))
                .unwrap_err();
            assert_eq!(err.to_string(), "Please fill in all fields");
        }
    }

    #[test]
    fn filed_case_is_pending_and_dated() {
        let detail = CaseDraft::new("Escrow dispute", "Funds never released")
            .with_defendant("0x9999...0000")
            .with_stake("0.75 ETH")
            .file(CaseId::from("4"), &"0x1234...5678".into(), Timestamp::new(MAR_15))
            .unwrap();
        assert_eq!(detail.case.status, CaseStatus::Pending);
        assert_eq!(detail.case.created_at, "2024-03-15");
        assert_eq!(detail.case.stake, "0.75 ETH");
        assert_eq!(detail.case.parties.plaintiff.as_str(), "0x1234...5678");
        assert_eq!(detail.case.parties.defendant.as_str(), "0x9999...0000");
        assert_eq!(detail.summary, "Funds never released");
        assert_eq!(
            detail.timeline,
            vec![TimelineEntry::new("2024-03-15", "Case Created")]
        );
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let detail = CaseDraft::new("t", "d")
            .with_defendant("   ")
            .file(CaseId::from("1"), &"0xaaaa".into(), Timestamp::EPOCH)
            .unwrap();
        assert_eq!(detail.case.parties.defendant.as_str(), UNASSIGNED_DEFENDANT);
        assert_eq!(detail.case.stake, DEFAULT_STAKE);
    }
}
