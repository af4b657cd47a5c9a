//! Result reporting.
//!
//! # Formats
//!
//! | Format | Shape |
//! |--------|-------|
//! | `text` | One human-readable line per configuration |
//! | `tsv` | Header plus one tab-separated row per configuration |
//! | `json` | A single JSON array, written when the report finishes |

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use super::trial::ConfigurationResult;

/// Report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Console lines.
    #[default]
    Text,
    /// Tab-separated table.
    Tsv,
    /// JSON array.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Tsv => f.write_str("tsv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "tsv" | "table" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (text, tsv, json)")),
        }
    }
}

const TSV_HEADER: &str =
    "processors\tjobs\tmax_delay\tavg_total_work\tavg_increasing\tavg_decreasing";

/// Streams configuration results to a writer.
///
/// Text and TSV rows are written as they arrive; JSON is buffered and
/// written by [`ReportWriter::finish`].
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    started: bool,
    buffered: Vec<ConfigurationResult>,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a writer for `format`.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            started: false,
            buffered: Vec::new(),
        }
    }

    /// Writes one result.
    pub fn write(&mut self, result: &ConfigurationResult) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.writer,
                "{} processors, {} jobs, {} max_delay, {} average total work -> {}/{} inc/dec runtime",
                result.num_processors,
                result.num_jobs,
                result.max_delay,
                result.avg_total_work,
                result.avg_increasing_ticks,
                result.avg_decreasing_ticks
            ),
            OutputFormat::Tsv => {
                self.write_header()?;
                writeln!(
                    self.writer,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    result.num_processors,
                    result.num_jobs,
                    result.max_delay,
                    result.avg_total_work,
                    result.avg_increasing_ticks,
                    result.avg_decreasing_ticks
                )
            }
            OutputFormat::Json => {
                self.buffered.push(result.clone());
                Ok(())
            }
        }
    }

    /// Flushes pending output and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        match self.format {
            OutputFormat::Text => {}
            // An empty table still gets its header.
            OutputFormat::Tsv => self.write_header()?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, &self.buffered)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_header(&mut self) -> io::Result<()> {
        if !self.started {
            self.started = true;
            writeln!(self.writer, "{TSV_HEADER}")?;
        }
        Ok(())
    }
}

/// Writes `results` to `writer` in `format`.
pub fn write_report<W: Write>(
    writer: W,
    results: &[ConfigurationResult],
    format: OutputFormat,
) -> io::Result<()> {
    let mut report = ReportWriter::new(writer, format);
    for result in results {
        report.write(result)?;
    }
    report.finish()?;
    Ok(())
}
