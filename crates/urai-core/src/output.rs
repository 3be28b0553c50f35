//! Output formatting for generated captions.
//!
//! Captions are written either as plain text under a platform heading (for
//! humans) or as JSON / JSON Lines records (for scripts).

use crate::types::{Model, Platform};
use serde::Serialize;
use std::io::{self, Write};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Platform heading followed by the caption
    Text,
    /// One pretty-printable JSON object per caption
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

/// One generated caption, as emitted by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct CaptionRecord {
    pub platform: Platform,
    pub title: String,
    pub model: Model,
    pub description: String,
}

impl CaptionRecord {
    pub fn new(platform: Platform, model: Model, description: impl Into<String>) -> Self {
        Self {
            platform,
            title: platform.title().to_string(),
            model,
            description: description.into(),
        }
    }
}

/// A writer that emits caption records in the chosen format.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
    items_written: usize,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer.
    ///
    /// `pretty` only affects [`OutputFormat::Json`].
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
            items_written: 0,
        }
    }

    /// Write a single caption.
    pub fn write(&mut self, record: &CaptionRecord) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                if self.items_written > 0 {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "== {} ==", record.title)?;
                writeln!(self.writer, "{}", record.description)?;
            }
            OutputFormat::Json => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut self.writer, record)
                        .map_err(io::Error::other)?;
                } else {
                    serde_json::to_writer(&mut self.writer, record).map_err(io::Error::other)?;
                }
                writeln!(self.writer)?;
            }
            OutputFormat::JsonLines => {
                // JSONL is never pretty-printed (one object per line)
                serde_json::to_writer(&mut self.writer, record).map_err(io::Error::other)?;
                writeln!(self.writer)?;
            }
        }
        self.items_written += 1;
        Ok(())
    }

    /// Get the number of captions written.
    pub fn items_written(&self) -> usize {
        self.items_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CaptionRecord> {
        vec![
            CaptionRecord::new(Platform::Twitter, Model::Gemini, "Hello #world"),
            CaptionRecord::new(Platform::Threads, Model::Gemini, "Thoughts? #photo"),
        ]
    }

    #[test]
    fn test_write_text() {
        let mut buffer = Vec::new();
        let mut writer = OutputWriter::new(&mut buffer, OutputFormat::Text, false);
        for record in &records() {
            writer.write(record).unwrap();
        }
        assert_eq!(writer.items_written(), 2);

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "== Twitter Description ==\nHello #world\n\n== Threads Post ==\nThoughts? #photo\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut buffer = Vec::new();
        let mut writer = OutputWriter::new(&mut buffer, OutputFormat::Json, false);
        writer.write(&records()[0]).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"platform\":\"twitter\""));
        assert!(output.contains("\"model\":\"gemini\""));
        assert!(output.contains("\"description\":\"Hello #world\""));
    }

    #[test]
    fn test_write_jsonl() {
        let mut buffer = Vec::new();
        let mut writer = OutputWriter::new(&mut buffer, OutputFormat::JsonLines, true);
        for record in &records() {
            writer.write(record).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.trim().split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Threads Post"));
    }
}
