use serde::{Deserialize, Serialize};

use crate::records::{Case, Hearing};

/// Categorical columns of the case table that can be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CaseColumn {
    CaseNumber,
    CnrNumber,
    CaseType,
    Status,
    JudgeName,
}

impl CaseColumn {
    pub fn name(self) -> &'static str {
        match self {
            CaseColumn::CaseNumber => "case_number",
            CaseColumn::CnrNumber => "cnr_number",
            CaseColumn::CaseType => "case_type",
            CaseColumn::Status => "status",
            CaseColumn::JudgeName => "judge_name",
        }
    }

    /// Value of this column for `case`, `None` when missing.
    pub fn value(self, case: &Case) -> Option<&str> {
        let value = match self {
            CaseColumn::CaseNumber => Some(case.case_number.as_str()),
            CaseColumn::CnrNumber => case.cnr_number.as_deref(),
            CaseColumn::CaseType => case.case_type.as_deref(),
            CaseColumn::Status => case.status.as_ref().map(|s| s.as_str()),
            CaseColumn::JudgeName => case.judge_name.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Categorical columns of the hearing table that can be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum HearingColumn {
    CaseId,
    CurrentStage,
    RemappedStage,
    PetitionerAdvocate,
}

impl HearingColumn {
    pub fn name(self) -> &'static str {
        match self {
            HearingColumn::CaseId => "case_id",
            HearingColumn::CurrentStage => "current_stage",
            HearingColumn::RemappedStage => "remapped_stage",
            HearingColumn::PetitionerAdvocate => "petitioner_advocate",
        }
    }

    pub fn value(self, hearing: &Hearing) -> Option<&str> {
        let value = match self {
            HearingColumn::CaseId => hearing.case_id.as_deref(),
            HearingColumn::CurrentStage => hearing.current_stage.as_deref(),
            HearingColumn::RemappedStage => hearing.remapped_stage.as_deref(),
            HearingColumn::PetitionerAdvocate => hearing.petitioner_advocate.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}
