use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use shared_types::{Case, CaseStatus, Hearing};

use super::{LoadError, TableKind};

/// Columns a case export must carry; every other known column is optional.
pub const REQUIRED_CASE_COLUMNS: &[&str] = &["COMBINED_CASE_NUMBER", "CURRENT_STATUS", "DATE_FILED"];

/// Columns a hearing export must carry.
pub const REQUIRED_HEARING_COLUMNS: &[&str] = &["CNR_NUMBER", "PetitionerAdvocate"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Cell contents that exports use for "no value".
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

#[derive(Debug, Deserialize)]
struct RawCase {
    #[serde(rename = "COMBINED_CASE_NUMBER", default)]
    case_number: Option<String>,
    #[serde(rename = "CNR_NUMBER", default)]
    cnr_number: Option<String>,
    #[serde(rename = "CASE_TYPE", default)]
    case_type: Option<String>,
    #[serde(rename = "CURRENT_STATUS", default)]
    status: Option<String>,
    #[serde(rename = "DATE_FILED", default)]
    date_filed: Option<String>,
    #[serde(rename = "DECISION_DATE", default)]
    decision_date: Option<String>,
    #[serde(rename = "DISPOSALTIME_ADJ", default)]
    disposal_time: Option<String>,
    #[serde(rename = "NJDG_JUDGE_NAME", default)]
    judge_name: Option<String>,
}

impl From<RawCase> for Case {
    fn from(raw: RawCase) -> Self {
        Self {
            case_number: non_empty(raw.case_number).unwrap_or_default(),
            cnr_number: non_empty(raw.cnr_number),
            case_type: non_empty(raw.case_type),
            status: non_empty(raw.status).map(CaseStatus::from),
            date_filed: raw.date_filed.as_deref().and_then(parse_date),
            decision_date: raw.decision_date.as_deref().and_then(parse_date),
            disposal_time_days: raw.disposal_time.as_deref().and_then(parse_number),
            judge_name: non_empty(raw.judge_name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawHearing {
    #[serde(rename = "CNR_NUMBER", default)]
    case_id: Option<String>,
    #[serde(rename = "HearingDate", default)]
    hearing_date: Option<String>,
    #[serde(rename = "CurrentStage", default)]
    current_stage: Option<String>,
    #[serde(rename = "Remappedstages", default)]
    remapped_stage: Option<String>,
    #[serde(rename = "PetitionerAdvocate", default)]
    petitioner_advocate: Option<String>,
}

impl From<RawHearing> for Hearing {
    fn from(raw: RawHearing) -> Self {
        Self {
            case_id: non_empty(raw.case_id),
            hearing_date: raw.hearing_date.as_deref().and_then(parse_date),
            current_stage: non_empty(raw.current_stage),
            remapped_stage: non_empty(raw.remapped_stage),
            petitioner_advocate: non_empty(raw.petitioner_advocate),
        }
    }
}

/// Parse a case export. Rows are kept even when fields are missing.
pub fn parse_cases(bytes: &[u8]) -> Result<Vec<Case>, LoadError> {
    parse_table::<RawCase, Case>(bytes, TableKind::Cases, REQUIRED_CASE_COLUMNS)
}

/// Parse a hearing export.
pub fn parse_hearings(bytes: &[u8]) -> Result<Vec<Hearing>, LoadError> {
    parse_table::<RawHearing, Hearing>(bytes, TableKind::Hearings, REQUIRED_HEARING_COLUMNS)
}

fn parse_table<Raw, Row>(
    bytes: &[u8],
    table: TableKind,
    required: &[&str],
) -> Result<Vec<Row>, LoadError>
where
    Raw: for<'de> Deserialize<'de>,
    Row: From<Raw>,
{
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv { table, source })?;
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            table,
            columns: missing,
        });
    }

    reader
        .deserialize::<Raw>()
        .map(|row| row.map(Row::from).map_err(|source| LoadError::Csv { table, source }))
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !MISSING_MARKERS.contains(&v.as_str()))
}

/// Lenient date parsing; anything unrecognised is a missing value.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
