//! # codonchain - DNA to protein translation
//!
//! Translates a short DNA sequence (custom or random) into a protein chain
//! and writes a plain-text report.
//!
//! ## Architecture
//!
//! The translation is a linear pipeline of pure functions around a fixed
//! codon table, with thin I/O at the edges:
//! - `codon_table`: The standard genetic code and amino acid metadata
//! - `sequence`: DNA validation, transcription and random generation
//! - `translation`: Codon segmentation, translation and chain assembly
//! - `report`: Plain-text report writer
//! - `prompt`: Interactive console prompts with retry loops

pub mod codon_table;
pub mod prompt;
pub mod report;
pub mod sequence;
pub mod translation;
