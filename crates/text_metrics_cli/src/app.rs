use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use metrics_logging::{metrics_error, metrics_info};
use text_metrics::{
    read_report, MarkupWordCounter, Summary, TextReport, WhitespaceWordCounter, WordCounter,
    STDIN_SOURCE,
};

use crate::config::{CliConfig, OutputFormat};

/// Count every input named in `config` and write the report to `out`.
///
/// Stdin is read once; naming it again repeats its report. Stops at the first
/// input that cannot be read or decoded.
pub fn run<R: Read>(config: &CliConfig, mut stdin: R, out: &mut dyn Write) -> Result<()> {
    let counter: &dyn WordCounter = if config.plain {
        &WhitespaceWordCounter
    } else {
        &MarkupWordCounter
    };
    let charset = config.charset.as_deref();

    let stdin_only = [PathBuf::from(STDIN_SOURCE)];
    let paths = if config.paths.is_empty() {
        &stdin_only[..]
    } else {
        &config.paths[..]
    };

    let mut stdin_report: Option<TextReport> = None;
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let counted = if path.as_os_str() == STDIN_SOURCE {
            match stdin_report.clone() {
                Some(report) => Ok(report),
                None => read_report(STDIN_SOURCE, &mut stdin, charset, counter)
                    .context("failed to count stdin")
                    .inspect(|report| stdin_report = Some(report.clone())),
            }
        } else {
            count_file(path, charset, counter)
        };
        let report = counted.inspect_err(|err| {
            metrics_error!("{err:#}");
        })?;
        reports.push(report);
    }

    let summary = Summary::from_reports(reports);
    metrics_info!(
        "counted {} words across {} input(s)",
        summary.total_words,
        summary.reports.len()
    );
    write_summary(&summary, config.format, out)
}

fn count_file(path: &Path, charset: Option<&str>, counter: &dyn WordCounter) -> Result<TextReport> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let report = read_report(&path.display().to_string(), file, charset, counter)
        .with_context(|| format!("failed to count {}", path.display()))?;
    Ok(report)
}

fn write_summary(summary: &Summary, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for report in &summary.reports {
                writeln!(out, "{}\t{}", report.words, report.source)?;
            }
            if summary.reports.len() > 1 {
                writeln!(out, "{}\ttotal", summary.total_words)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
