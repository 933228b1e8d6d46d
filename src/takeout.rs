use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::HistogramaError;

/// One entry of the activity history.  Takeout records carry many more
/// fields (titleUrl, subtitles, products, ...); only the source tag and
/// the timestamp matter here, the rest is dropped at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub header: String,
    pub time: String,
}

/// A record as it appears in the export, before validation.  The two
/// fields are captured as raw JSON values so that an absent field and a
/// field of the wrong type are reported the same way, with the record's
/// position in the array.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    header: Option<Value>,
    #[serde(default)]
    time: Option<Value>,
}

/// Read and decode a takeout history file.
pub fn read_records(path: &Path) -> Result<Vec<ActivityRecord>, HistogramaError> {
    let contents = fs::read_to_string(path).map_err(|e| HistogramaError::InputNotFound {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_records(&contents)
}

/// Decode a JSON document whose top level is an array of records.
pub fn parse_records(contents: &str) -> Result<Vec<ActivityRecord>, HistogramaError> {
    let raw: Vec<RawRecord> = serde_json::from_str(contents)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| validate(index, record))
        .collect()
}

fn validate(index: usize, record: RawRecord) -> Result<ActivityRecord, HistogramaError> {
    let header = string_field(index, record.header, "header")?;
    let time = string_field(index, record.time, "time")?;
    Ok(ActivityRecord { header, time })
}

fn string_field(
    index: usize,
    value: Option<Value>,
    field: &'static str,
) -> Result<String, HistogramaError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(HistogramaError::MissingField { index, field }),
    }
}
