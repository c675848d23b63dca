//! Structured init diagnostics.
//!
//! The lookup path never logs. The one-time initializer turns its
//! [`crate::init::InitReport`] into a [`SizeMapLogRecord`] and, when
//! `FRANKENMALLOC_LOG` names a target, writes it as one JSONL line.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

/// Severity level for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Where init diagnostics are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to, one JSON object per line.
    File(PathBuf),
}

/// Structured size-map lifecycle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeMapLogRecord {
    pub timestamp: String,
    /// Correlation id (`sizemap::<event>::<pid>`).
    pub trace_id: String,
    pub level: LogLevel,
    /// Event kind (`size_map_init`, `size_map_override_rejected`).
    pub event: &'static str,
    /// Page model name.
    pub model: &'static str,
    /// Which specification ended up active.
    pub source: &'static str,
    /// Machine-readable outcome label (`ok`, `fallback`).
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Free-form details for debugging.
    pub details: String,
}

impl SizeMapLogRecord {
    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Writes `record` to `target` as one JSON line.
pub fn emit_record(record: &SizeMapLogRecord, target: &LogTarget) -> std::io::Result<()> {
    let line = record.to_jsonl().map_err(std::io::Error::other)?;
    match target {
        LogTarget::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
        LogTarget::File(path) => {
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            writeln!(file, "{line}")
        }
    }
}

pub(crate) fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}Z", duration.as_secs(), duration.subsec_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SizeMapLogRecord {
        SizeMapLogRecord {
            timestamp: now_utc(),
            trace_id: "sizemap::size_map_init::1".to_string(),
            level: LogLevel::Warn,
            event: "size_map_override_rejected",
            model: "default",
            source: "default",
            outcome: "fallback",
            error: Some("expected 86 size classes, found 3".to_string()),
            details: "override_len=3".to_string(),
        }
    }

    #[test]
    fn jsonl_has_required_fields() {
        let line = record().to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        for field in ["timestamp", "trace_id", "level", "event", "model", "source", "outcome"] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["level"], "warn");
        assert_eq!(value["outcome"], "fallback");
    }

    #[test]
    fn error_field_omitted_when_absent() {
        let mut rec = record();
        rec.error = None;
        let value: serde_json::Value = serde_json::from_str(&rec.to_jsonl().unwrap()).unwrap();
        assert!(value.get("error").is_none());
    }

    #[test]
    fn emit_appends_to_file() {
        let path = std::env::temp_dir().join(format!(
            "frankenmalloc-sizemap-diag-{}.jsonl",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let target = LogTarget::File(path.clone());
        emit_record(&record(), &target).unwrap();
        emit_record(&record(), &target).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        let _ = std::fs::remove_file(&path);
    }
}
