use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Case status ─────────────────────────────────────────────────────

/// Status of a case as reported in the `CURRENT_STATUS` column.
///
/// Only `Pending` and `Disposed` drive metrics; any other value is kept
/// verbatim so it still shows up in tables and frequency charts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    Pending,
    Disposed,
    Other(String),
}

impl CaseStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Pending" => CaseStatus::Pending,
            "Disposed" => CaseStatus::Disposed,
            other => CaseStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::Disposed => "Disposed",
            CaseStatus::Other(s) => s,
        }
    }
}

impl From<String> for CaseStatus {
    fn from(s: String) -> Self {
        CaseStatus::parse(&s)
    }
}

impl From<CaseStatus> for String {
    fn from(s: CaseStatus) -> Self {
        s.as_str().to_string()
    }
}

// ── Source rows ─────────────────────────────────────────────────────

/// One row of the case table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub case_number: String,
    /// CNR identifier shared with the hearing table, when the export has it.
    pub cnr_number: Option<String>,
    pub case_type: Option<String>,
    pub status: Option<CaseStatus>,
    pub date_filed: Option<NaiveDate>,
    pub decision_date: Option<NaiveDate>,
    /// Raw `DISPOSALTIME_ADJ` value. For pending cases this is the age of
    /// the case rather than a disposal time; see [`Case::disposal_days`].
    pub disposal_time_days: Option<f64>,
    pub judge_name: Option<String>,
}

impl Case {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, Some(CaseStatus::Pending))
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.status, Some(CaseStatus::Disposed))
    }

    /// Disposal time in days, defined only for disposed cases.
    pub fn disposal_days(&self) -> Option<f64> {
        if self.is_disposed() {
            self.disposal_time_days
        } else {
            None
        }
    }
}

/// One row of the hearing table. Many hearings may share a `case_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hearing {
    /// CNR number of the case this hearing belongs to.
    pub case_id: Option<String>,
    pub hearing_date: Option<NaiveDate>,
    pub current_stage: Option<String>,
    /// Coarser stage bucket used for bottleneck analysis.
    pub remapped_stage: Option<String>,
    pub petitioner_advocate: Option<String>,
}
