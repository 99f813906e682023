use std::io::Read;

use metrics_logging::metrics_debug;
use serde::Serialize;

use crate::count::WordCounter;
use crate::decode::decode_text;
use crate::error::MetricsError;

/// Source name used for standard input.
pub const STDIN_SOURCE: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReport {
    pub source: String,
    pub encoding: String,
    pub words: usize,
}

impl TextReport {
    pub fn from_text(
        source: impl Into<String>,
        encoding: impl Into<String>,
        text: &str,
        counter: &dyn WordCounter,
    ) -> Self {
        Self {
            source: source.into(),
            encoding: encoding.into(),
            words: counter.count(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub reports: Vec<TextReport>,
    pub total_words: usize,
}

impl Summary {
    pub fn from_reports(reports: Vec<TextReport>) -> Self {
        let total_words = reports
            .iter()
            .fold(0usize, |acc, r| acc.saturating_add(r.words));
        Self {
            reports,
            total_words,
        }
    }
}

/// Read everything from `reader`, decode it and count its words.
pub fn read_report<R: Read>(
    source_name: &str,
    mut reader: R,
    charset_hint: Option<&str>,
    counter: &dyn WordCounter,
) -> Result<TextReport, MetricsError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| MetricsError::Io {
            source_name: source_name.to_string(),
            source,
        })?;
    let decoded = decode_text(&bytes, charset_hint)?;
    let report = TextReport::from_text(source_name, decoded.encoding_label, &decoded.text, counter);
    metrics_debug!(
        "counted {} words in {} ({} bytes, {})",
        report.words,
        report.source,
        bytes.len(),
        report.encoding
    );
    Ok(report)
}
