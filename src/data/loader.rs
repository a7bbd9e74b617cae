use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, Message};

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Violations of the expected input schema. Anything else (I/O,
/// malformed rows) surfaces as the underlying parser error.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required 'text' column")]
    MissingTextColumn,
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a message dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row required, with a `text` column
/// * `.json` – `[{ "text": "...", ...extra }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(SchemaError::UnsupportedExtension(other.to_string()).into()),
    }
}

/// Empty cells mean "no text"; the classifier maps that to NOT SPAM.
fn normalize_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one of which must be
/// `text`. Every other column rides along as display metadata in the
/// header's order.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let text_idx = headers
        .iter()
        .position(|h| h == "text")
        .ok_or(SchemaError::MissingTextColumn)?;

    let extra_columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != text_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let mut messages = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let text = normalize_text(record.get(text_idx).unwrap_or(""));

        let mut extra = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == text_idx {
                continue;
            }
            if let Some(col_name) = headers.get(col_idx) {
                extra.insert(col_name.clone(), value.to_string());
            }
        }

        messages.push(Message { text, extra });
    }

    Ok(Dataset::new(messages, extra_columns))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One record of the records-oriented JSON input.
#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    text: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, JsonValue>,
}

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "text": "win a free vacation", "source": "sms" },
///   { "text": null, "source": "email" }
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let raw = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<JsonRecord> =
        serde_json::from_str(&raw).context("parsing JSON records array")?;

    let messages = records
        .into_iter()
        .map(|rec| {
            let text = rec.text.as_deref().and_then(normalize_text);
            let extra = rec
                .extra
                .iter()
                .map(|(k, v)| (k.clone(), display_value(v)))
                .collect();
            Message { text, extra }
        })
        .collect();

    Ok(Dataset::from_messages(messages))
}

fn display_value(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn csv_load_keeps_rows_and_column_order() {
        let file = temp_file(
            ".csv",
            "id,text,source\n1,free bonus,sms\n2,hello world,email\n3,,sms\n",
        );

        let ds = load_file(file.path()).expect("load CSV");
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.extra_columns, vec!["id".to_string(), "source".to_string()]);

        assert_eq!(ds.messages[0].text.as_deref(), Some("free bonus"));
        assert_eq!(ds.messages[0].extra["source"], "sms");
        assert_eq!(ds.messages[1].text.as_deref(), Some("hello world"));
        // Empty cell is absent text.
        assert_eq!(ds.messages[2].text, None);
    }

    #[test]
    fn csv_without_text_column_is_a_schema_error() {
        let file = temp_file(".csv", "id,body\n1,hello\n");

        let err = load_file(file.path()).expect_err("missing text column");
        assert!(matches!(
            err.downcast_ref::<SchemaError>(),
            Some(SchemaError::MissingTextColumn)
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = temp_file(".parquet", "");

        let err = load_file(file.path()).expect_err("unsupported extension");
        assert!(matches!(
            err.downcast_ref::<SchemaError>(),
            Some(SchemaError::UnsupportedExtension(ext)) if ext == "parquet"
        ));
    }

    #[test]
    fn json_records_load_with_null_text() {
        let file = temp_file(
            ".json",
            r#"[
                { "text": "win a free jackpot", "source": "sms" },
                { "text": null, "source": "email" },
                { "source": "web" }
            ]"#,
        );

        let ds = load_file(file.path()).expect("load JSON");
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.extra_columns, vec!["source".to_string()]);
        assert_eq!(ds.messages[0].text.as_deref(), Some("win a free jackpot"));
        assert_eq!(ds.messages[1].text, None);
        assert_eq!(ds.messages[2].text, None);
        assert_eq!(ds.messages[2].extra["source"], "web");
    }

    #[test]
    fn json_non_string_extras_become_display_strings() {
        let file = temp_file(".json", r#"[{ "text": "hi", "id": 7, "flag": true }]"#);

        let ds = load_file(file.path()).expect("load JSON");
        assert_eq!(ds.messages[0].extra["id"], "7");
        assert_eq!(ds.messages[0].extra["flag"], "true");
    }
}
