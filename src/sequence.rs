//! DNA sequence validation, transcription and random generation.
//!
//! A DNA sequence accepted by the tool is 9 to 30 bases long, a multiple
//! of 3, and made only of A, C, G and T (case-insensitive).

use rand::Rng;
use thiserror::Error;

/// Shortest accepted DNA sequence.
pub const MIN_LENGTH: usize = 9;
/// Longest accepted DNA sequence.
pub const MAX_LENGTH: usize = 30;
/// DNA alphabet used for validation and random generation.
pub const DNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Reasons a DNA sequence (or a requested length) is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Empty sequence")]
    Empty,

    #[error("Length must be between {min} and {max} (got {0})", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange(usize),

    #[error("Length must be divisible by 3 (got {0})")]
    NotCodonAligned(usize),

    #[error("Invalid base '{base}' at position {position} (expected A, C, G or T)")]
    InvalidBase { base: char, position: usize },
}

/// Where the DNA sequence of a translation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSource {
    /// A sequence typed in by the user.
    Custom(String),
    /// A random sequence of the given length.
    Random(usize),
}

impl SequenceSource {
    /// Resolves the source to an uppercase DNA sequence.
    ///
    /// Random sources draw a fresh sequence on every call.
    pub fn dna(&self) -> String {
        match self {
            SequenceSource::Custom(seq) => seq.to_uppercase(),
            SequenceSource::Random(length) => generate(*length),
        }
    }
}

/// Checks a requested sequence length (range and codon alignment).
pub fn check_length(length: usize) -> Result<(), SequenceError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(SequenceError::LengthOutOfRange(length));
    }
    if length % 3 != 0 {
        return Err(SequenceError::NotCodonAligned(length));
    }
    Ok(())
}

/// Checks a DNA sequence and reports the first rule it breaks.
///
/// Lowercase bases are accepted; the input is not modified.
pub fn check_sequence(sequence: &str) -> Result<(), SequenceError> {
    if sequence.is_empty() {
        return Err(SequenceError::Empty);
    }
    // Count chars, not bytes, so a multi-byte character is reported as a bad base
    check_length(sequence.chars().count())?;
    match sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !is_dna_base(*c))
    {
        Some((position, base)) => Err(SequenceError::InvalidBase {
            base,
            position: position + 1,
        }),
        None => Ok(()),
    }
}

/// Returns true if the sequence is a valid DNA sequence for translation.
pub fn validate(sequence: &str) -> bool {
    check_sequence(sequence).is_ok()
}

fn is_dna_base(c: char) -> bool {
    c.is_ascii() && DNA_BASES.contains(&(c as u8).to_ascii_uppercase())
}

/// Transcribes DNA to RNA with the per-base substitution A→U, C→G, G→C, T→A.
///
/// Input is uppercased first. Length is not checked; callers validate
/// before transcribing, so an `InvalidBase` here is a contract violation.
pub fn transcribe(dna: &str) -> Result<String, SequenceError> {
    dna.chars()
        .enumerate()
        .map(|(position, base)| match base.to_ascii_uppercase() {
            'A' => Ok('U'),
            'C' => Ok('G'),
            'G' => Ok('C'),
            'T' => Ok('A'),
            _ => Err(SequenceError::InvalidBase {
                base,
                position: position + 1,
            }),
        })
        .collect()
}

/// Generates a random DNA sequence using the thread-local RNG.
pub fn generate(length: usize) -> String {
    generate_with(length, &mut rand::rng())
}

/// Generates a random DNA sequence, each base drawn uniformly from ACGT.
pub fn generate_with<R: Rng>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| DNA_BASES[rng.random_range(0..DNA_BASES.len())] as char)
        .collect()
}
