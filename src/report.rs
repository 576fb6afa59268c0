//! Plain-text translation report.
//!
//! A report is a single `<name>.txt` file. It is created (or truncated)
//! with a fixed header, then every section is appended in turn:
//!
//! ```text
//! DNA TO PROTEIN TRANSLATION REPORT
//! =================================
//! Generated on: 2025-01-31
//! Tool version: 0.1.0
//!
//! CUSTOM DNA SEQUENCE:
//! ATGTTCCCG
//!
//! ...
//! ```
//!
//! The file name is used as given; no path sanitizing is done.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::sequence::SequenceSource;
use crate::translation::Translation;

/// Extension appended to every report name.
pub const REPORT_EXTENSION: &str = "txt";

const TITLE: &str = "DNA TO PROTEIN TRANSLATION REPORT";

const NOTES: &str = "This report was produced by an educational tool. It is NOT a fully \
accurate representation of protein synthesis and does not apply to real-life contexts: \
a start codon (AUG) is always added in front of the sequence, stop codons are removed \
instead of ending translation, and only the standard genetic code in a single reading \
frame is used.";

const NOTES_WIDTH: usize = 72;

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Writes a translation report to `<dir>/<name>.txt`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Creates a writer for `<dir>/<name>.txt`. Nothing is written yet.
    pub fn new<P: AsRef<Path>>(dir: P, name: &str) -> Self {
        let path = dir
            .as_ref()
            .join(format!("{}.{}", name, REPORT_EXTENSION));
        Self { path }
    }

    /// Path of the report file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ReportError {
        ReportError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn append(&self, text: &str) -> ReportResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| self.io_error(e))
    }

    /// Creates or truncates the report and writes the header.
    pub fn initialize(&self) -> ReportResult<()> {
        let mut file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let header = format!(
            "{}\n{}\nGenerated on: {}\nTool version: {}\n\n",
            TITLE,
            "=".repeat(TITLE.len()),
            chrono::Local::now().format("%Y-%m-%d"),
            env!("CARGO_PKG_VERSION"),
        );
        file.write_all(header.as_bytes())
            .map_err(|e| self.io_error(e))?;
        info!("Created report {}", self.path.display());
        Ok(())
    }

    /// Appends a section: the uppercased title followed by its content.
    pub fn write_section(&self, title: &str, content: &str) -> ReportResult<()> {
        self.append(&format!("{}:\n{}\n\n", title.to_uppercase(), content))
    }

    /// Appends the disclaimer and the authors line.
    pub fn write_final_notes(&self) -> ReportResult<()> {
        let notes = format!(
            "IMPORTANT NOTES:\n{}\n\nAuthors: {}\n",
            textwrap::fill(NOTES, NOTES_WIDTH),
            env!("CARGO_PKG_AUTHORS").replace(':', ", "),
        );
        self.append(&notes)
    }

    /// Appends one section per stage of the translation.
    pub fn write_translation(&self, translation: &Translation) -> ReportResult<()> {
        let dna_title = match translation.source {
            SequenceSource::Custom(_) => "Custom DNA sequence".to_string(),
            SequenceSource::Random(length) => format!("Random DNA sequence ({} bases)", length),
        };
        self.write_section(&dna_title, &translation.dna)?;
        self.write_section("RNA sequence", &translation.rna)?;
        self.write_section("Codons", &translation.codons.join(", "))?;

        let codes: Vec<&str> = translation.amino_acids.iter().map(|aa| aa.code()).collect();
        self.write_section("Amino acids", &codes.join(", "))?;

        let details: Vec<String> = translation
            .distinct_amino_acids()
            .iter()
            .map(|aa| {
                format!(
                    "{} ({})  {:<14} {}",
                    aa.code(),
                    aa.one_letter(),
                    aa.full_name(),
                    aa.chemical_type()
                )
            })
            .collect();
        self.write_section("Amino acid details", &details.join("\n"))?;

        self.write_section("Protein chain", &translation.protein_chain)
    }

    /// Writes a complete report: header, translation sections and notes.
    pub fn write_report(&self, translation: &Translation) -> ReportResult<()> {
        self.initialize()?;
        self.write_translation(translation)?;
        self.write_final_notes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_path_has_txt_extension() {
        let writer = ReportWriter::new("/tmp/reports", "my_report");
        assert_eq!(writer.path(), Path::new("/tmp/reports/my_report.txt"));
    }

    #[test]
    fn test_initialize_report() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), "test_report");
        writer.initialize().unwrap();

        assert!(writer.path().exists());
        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(content.starts_with("DNA TO PROTEIN TRANSLATION REPORT\n"));
        assert!(content.contains("Generated on:"));
        assert!(content.contains(&format!("Tool version: {}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_initialize_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), "again");
        fs::write(writer.path(), "old content that must go").unwrap();

        writer.initialize().unwrap();
        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(!content.contains("old content"));
    }

    #[test]
    fn test_write_section() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), "sections");
        writer.initialize().unwrap();
        writer.write_section("Test Section", "This is test content").unwrap();
        writer.write_section("Second", "more").unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(content.contains("TEST SECTION:\nThis is test content\n\n"));
        // Sections are appended in order
        assert!(content.find("TEST SECTION:").unwrap() < content.find("SECOND:").unwrap());
    }

    #[test]
    fn test_write_final_notes() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), "notes");
        writer.initialize().unwrap();
        writer.write_final_notes().unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(content.contains("IMPORTANT NOTES:"));
        assert!(content.contains("educational tool"));
        assert!(content.contains("Utsav Choudhury"));
        assert!(content.contains("Sukarth Acharya"));
        // Notes are wrapped
        let notes = &content[content.find("IMPORTANT NOTES:").unwrap()..];
        assert!(notes.lines().all(|line| line.len() <= NOTES_WIDTH));
    }

    #[test]
    fn test_write_report() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), "full");
        let translation = Translation::from_dna("TACTTCCCG").unwrap();
        writer.write_report(&translation).unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(content.contains("CUSTOM DNA SEQUENCE:\nTACTTCCCG\n"));
        assert!(content.contains("RNA SEQUENCE:\nAUGAAGGGC\n"));
        assert!(content.contains("CODONS:\nAUG, AUG, AAG, GGC\n"));
        assert!(content.contains("AMINO ACIDS:\nMet, Met, Lys, Gly\n"));
        assert!(content.contains("Methionine"));
        assert!(content.contains("Basic"));
        assert!(content.contains("PROTEIN CHAIN:\nMet-Met-Lys-Gly\n"));
        assert!(content.trim_end().ends_with("Sukarth Acharya"));
    }

    #[test]
    fn test_write_report_random_label() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), "random");
        let translation = Translation::new(SequenceSource::Random(12)).unwrap();
        writer.write_report(&translation).unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(content.contains("RANDOM DNA SEQUENCE (12 BASES):"));
        assert!(content.contains(&translation.dna));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("does/not/exist"), "report");
        let err = writer.initialize().unwrap_err();
        assert!(err.to_string().contains("report.txt"));
    }
}
