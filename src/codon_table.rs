//! The RNA codon table and amino acid metadata.
//!
//! This module provides:
//! - The standard genetic code as an immutable 64-entry table
//! - Codon to amino acid lookup (`lookup`)
//! - Start/stop codon queries and inverse lookup (`codons_for`)
//! - Full names and chemical types of the 20 amino acids
//!
//! Nothing in here fails: anything outside the 64 canonical codons or the
//! 20 known residues is reported as [`AminoAcidCode::Unknown`] or the
//! `"Unknown"` string.

use std::fmt;

/// RNA bases in NCBI table order.
const BASES: [u8; 4] = [b'U', b'C', b'A', b'G'];

/// The standard genetic code (NCBI table 1) as one-letter residues.
///
/// NCBI order: UUU, UUC, UUA, UUG, UCU, UCC, ... (Base1, Base2, Base3).
/// `*` marks a stop codon.
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// The only start codon of the standard code.
pub const START_CODON: &str = "AUG";

/// The three stop codons of the standard code.
pub const STOP_CODONS: [&str; 3] = ["UAA", "UAG", "UGA"];

/// Chemical family of an amino acid side chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChemicalType {
    Aliphatic,
    Aromatic,
    Acidic,
    Basic,
    Hydroxyl,
    SulfurContaining,
    Amide,
    Cyclic,
}

impl ChemicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChemicalType::Aliphatic => "Aliphatic",
            ChemicalType::Aromatic => "Aromatic",
            ChemicalType::Acidic => "Acidic",
            ChemicalType::Basic => "Basic",
            ChemicalType::Hydroxyl => "Hydroxyl",
            ChemicalType::SulfurContaining => "Sulfur-containing",
            ChemicalType::Amide => "Amide",
            ChemicalType::Cyclic => "Cyclic",
        }
    }
}

impl fmt::Display for ChemicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the 20 standard amino acids, named by its three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

impl AminoAcid {
    /// All 20 amino acids in alphabetical order of their code.
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Ala,
        AminoAcid::Arg,
        AminoAcid::Asn,
        AminoAcid::Asp,
        AminoAcid::Cys,
        AminoAcid::Gln,
        AminoAcid::Glu,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Leu,
        AminoAcid::Lys,
        AminoAcid::Met,
        AminoAcid::Phe,
        AminoAcid::Pro,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Trp,
        AminoAcid::Tyr,
        AminoAcid::Val,
    ];

    /// Finds an amino acid by its three-letter code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|aa| aa.code().eq_ignore_ascii_case(code))
    }

    /// Finds an amino acid by its IUPAC one-letter code.
    pub fn from_one_letter(letter: u8) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|aa| aa.one_letter() as u8 == letter.to_ascii_uppercase())
    }

    /// Three-letter code, e.g. `Met`.
    pub fn code(&self) -> &'static str {
        match self {
            AminoAcid::Ala => "Ala",
            AminoAcid::Arg => "Arg",
            AminoAcid::Asn => "Asn",
            AminoAcid::Asp => "Asp",
            AminoAcid::Cys => "Cys",
            AminoAcid::Gln => "Gln",
            AminoAcid::Glu => "Glu",
            AminoAcid::Gly => "Gly",
            AminoAcid::His => "His",
            AminoAcid::Ile => "Ile",
            AminoAcid::Leu => "Leu",
            AminoAcid::Lys => "Lys",
            AminoAcid::Met => "Met",
            AminoAcid::Phe => "Phe",
            AminoAcid::Pro => "Pro",
            AminoAcid::Ser => "Ser",
            AminoAcid::Thr => "Thr",
            AminoAcid::Trp => "Trp",
            AminoAcid::Tyr => "Tyr",
            AminoAcid::Val => "Val",
        }
    }

    /// IUPAC one-letter code, e.g. `M`.
    pub fn one_letter(&self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Arg => 'R',
            AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C',
            AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Leu => 'L',
            AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M',
            AminoAcid::Phe => 'F',
            AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Val => 'V',
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            AminoAcid::Ala => "Alanine",
            AminoAcid::Arg => "Arginine",
            AminoAcid::Asn => "Asparagine",
            AminoAcid::Asp => "Aspartic acid",
            AminoAcid::Cys => "Cysteine",
            AminoAcid::Gln => "Glutamine",
            AminoAcid::Glu => "Glutamic acid",
            AminoAcid::Gly => "Glycine",
            AminoAcid::His => "Histidine",
            AminoAcid::Ile => "Isoleucine",
            AminoAcid::Leu => "Leucine",
            AminoAcid::Lys => "Lysine",
            AminoAcid::Met => "Methionine",
            AminoAcid::Phe => "Phenylalanine",
            AminoAcid::Pro => "Proline",
            AminoAcid::Ser => "Serine",
            AminoAcid::Thr => "Threonine",
            AminoAcid::Trp => "Tryptophan",
            AminoAcid::Tyr => "Tyrosine",
            AminoAcid::Val => "Valine",
        }
    }

    pub fn chemical_type(&self) -> ChemicalType {
        match self {
            AminoAcid::Ala | AminoAcid::Gly | AminoAcid::Ile | AminoAcid::Leu | AminoAcid::Val => {
                ChemicalType::Aliphatic
            }
            AminoAcid::Phe | AminoAcid::Trp | AminoAcid::Tyr => ChemicalType::Aromatic,
            AminoAcid::Asp | AminoAcid::Glu => ChemicalType::Acidic,
            AminoAcid::Arg | AminoAcid::His | AminoAcid::Lys => ChemicalType::Basic,
            AminoAcid::Ser | AminoAcid::Thr => ChemicalType::Hydroxyl,
            AminoAcid::Cys | AminoAcid::Met => ChemicalType::SulfurContaining,
            AminoAcid::Asn | AminoAcid::Gln => ChemicalType::Amide,
            AminoAcid::Pro => ChemicalType::Cyclic,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What a codon means according to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcidCode {
    /// A regular amino acid.
    Amino(AminoAcid),
    /// A stop codon, displayed as `STOP`.
    Stop,
    /// Anything that is not one of the 64 canonical codons.
    Unknown,
}

impl AminoAcidCode {
    /// Parses a displayed code (`"Met"`, `"STOP"`); anything else is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("STOP") {
            return AminoAcidCode::Stop;
        }
        AminoAcid::from_code(code)
            .map(AminoAcidCode::Amino)
            .unwrap_or(AminoAcidCode::Unknown)
    }

    /// Returns the amino acid, if this code is one.
    pub fn amino_acid(&self) -> Option<AminoAcid> {
        match self {
            AminoAcidCode::Amino(aa) => Some(*aa),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AminoAcidCode::Amino(aa) => aa.code(),
            AminoAcidCode::Stop => "STOP",
            AminoAcidCode::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AminoAcidCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn base_index(b: u8) -> Option<usize> {
    BASES.iter().position(|&base| base == b.to_ascii_uppercase())
}

/// Converts a 3-base RNA codon to an index in [0, 64).
fn codon_index(codon: &str) -> Option<usize> {
    let bytes = codon.as_bytes();
    if bytes.len() != 3 {
        return None;
    }
    let b1 = base_index(bytes[0])?;
    let b2 = base_index(bytes[1])?;
    let b3 = base_index(bytes[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

fn index_to_codon(idx: usize) -> String {
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
        .iter()
        .map(|&b| b as char)
        .collect()
}

fn decode(letter: u8) -> AminoAcidCode {
    if letter == b'*' {
        return AminoAcidCode::Stop;
    }
    AminoAcid::from_one_letter(letter)
        .map(AminoAcidCode::Amino)
        .unwrap_or(AminoAcidCode::Unknown)
}

/// Translates a single RNA codon.
///
/// Case-insensitive. Anything that is not one of the 64 canonical codons
/// over A/C/G/U (wrong length, DNA `T`, ambiguity codes) maps to
/// [`AminoAcidCode::Unknown`].
pub fn lookup(codon: &str) -> AminoAcidCode {
    match codon_index(codon) {
        Some(idx) => decode(STANDARD_CODE[idx]),
        None => AminoAcidCode::Unknown,
    }
}

pub fn is_start_codon(codon: &str) -> bool {
    codon.eq_ignore_ascii_case(START_CODON)
}

pub fn is_stop_codon(codon: &str) -> bool {
    STOP_CODONS.iter().any(|stop| stop.eq_ignore_ascii_case(codon))
}

/// Iterates over all 64 canonical codons with their meaning, in NCBI order.
pub fn codons() -> impl Iterator<Item = (String, AminoAcidCode)> {
    STANDARD_CODE
        .iter()
        .enumerate()
        .map(|(idx, &letter)| (index_to_codon(idx), decode(letter)))
}

/// All codons coding for `code` (a three-letter code or `STOP`).
///
/// Empty for unrecognized codes.
pub fn codons_for(code: &str) -> Vec<String> {
    let wanted = AminoAcidCode::from_code(code);
    if wanted == AminoAcidCode::Unknown {
        return Vec::new();
    }
    codons()
        .filter(|(_, meaning)| *meaning == wanted)
        .map(|(codon, _)| codon)
        .collect()
}

/// Full name for a three-letter code, or `"Unknown"`.
pub fn full_name(code: &str) -> &'static str {
    AminoAcid::from_code(code)
        .map(|aa| aa.full_name())
        .unwrap_or("Unknown")
}

/// Chemical type for a three-letter code, or `"Unknown"`.
pub fn chemical_type(code: &str) -> &'static str {
    AminoAcid::from_code(code)
        .map(|aa| aa.chemical_type().as_str())
        .unwrap_or("Unknown")
}
