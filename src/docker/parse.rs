//! Parsing of `docker ps --format '{{json .}}'` output.

use serde_json::Value;

use super::DockerError;
use crate::record::Record;

/// Parses newline-delimited JSON objects.
///
/// Blank lines are skipped. The first line that is not a JSON object aborts
/// parsing with its 1-based line number.
pub fn parse_records(output: &str) -> Result<Vec<Record>, DockerError> {
    let mut records = Vec::new();

    for (idx, line) in output.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line).map_err(|source| DockerError::InvalidJson {
            line: idx + 1,
            source,
        })?;

        match value {
            Value::Object(map) => records.push(Record::new(map)),
            _ => return Err(DockerError::NotAnObject { line: idx + 1 }),
        }
    }

    Ok(records)
}
