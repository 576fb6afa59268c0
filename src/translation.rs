//! Codon segmentation, translation and protein chain assembly.
//!
//! The pipeline is linear:
//!
//! ```text
//! DNA --transcribe--> RNA --segment--> codons --translate--> amino acids --assemble--> chain
//! ```
//!
//! Segmentation always puts a synthetic `AUG` start codon in front of the
//! codons read from the RNA and drops every stop codon instead of ending
//! the chain there. The output is deterministic, not biologically accurate.

use log::debug;

use crate::codon_table::{self, AminoAcid, AminoAcidCode, START_CODON};
use crate::sequence::{check_sequence, transcribe, SequenceError, SequenceSource};

/// Splits an RNA sequence into codons.
///
/// Triplets are read left to right without overlap; a trailing fragment
/// shorter than 3 bases is kept as is. `AUG` is prepended whatever the
/// first codon is, then stop codons (`UAA`, `UAG`, `UGA`) are removed.
pub fn segment(rna: &str) -> Vec<String> {
    let chars: Vec<char> = rna.chars().collect();
    std::iter::once(START_CODON.to_string())
        .chain(chars.chunks(3).map(|chunk| chunk.iter().collect::<String>()))
        .filter(|codon| !codon_table::is_stop_codon(codon))
        .collect()
}

/// Maps codons to amino acids, dropping `STOP` and `Unknown` results.
pub fn translate<S: AsRef<str>>(codons: &[S]) -> Vec<AminoAcid> {
    codons
        .iter()
        .filter_map(|codon| codon_table::lookup(codon.as_ref()).amino_acid())
        .collect()
}

/// Joins amino acid codes with `-`, e.g. `Met-Lys`.
pub fn assemble(amino_acids: &[AminoAcid]) -> String {
    amino_acids
        .iter()
        .map(AminoAcid::code)
        .collect::<Vec<_>>()
        .join("-")
}

/// Everything produced by translating one DNA sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Where the DNA came from
    pub source: SequenceSource,
    /// Uppercase DNA sequence
    pub dna: String,
    /// Transcribed RNA sequence
    pub rna: String,
    /// Codons after start insertion and stop removal
    pub codons: Vec<String>,
    /// Translated residues
    pub amino_acids: Vec<AminoAcid>,
    /// Hyphen-joined protein chain
    pub protein_chain: String,
}

impl Translation {
    /// Resolves the source and runs the full pipeline on it.
    ///
    /// The DNA is validated before transcription; an invalid custom
    /// sequence or random length is returned as an error.
    pub fn new(source: SequenceSource) -> Result<Self, SequenceError> {
        let dna = source.dna();
        check_sequence(&dna)?;
        debug!("DNA sequence: {}", dna);

        let rna = transcribe(&dna)?;
        debug!("RNA sequence: {}", rna);

        let codons = segment(&rna);
        debug!("Codons: {}", codons.join(" "));

        let amino_acids = translate(&codons);
        let protein_chain = assemble(&amino_acids);
        debug!("Protein chain: {}", protein_chain);

        Ok(Self {
            source,
            dna,
            rna,
            codons,
            amino_acids,
            protein_chain,
        })
    }

    /// Translates a user-supplied DNA sequence.
    pub fn from_dna(dna: &str) -> Result<Self, SequenceError> {
        Self::new(SequenceSource::Custom(dna.to_string()))
    }

    /// Distinct amino acids of the chain, in order of first appearance.
    pub fn distinct_amino_acids(&self) -> Vec<AminoAcid> {
        let mut seen = Vec::new();
        for &aa in &self.amino_acids {
            if !seen.contains(&aa) {
                seen.push(aa);
            }
        }
        seen
    }

    /// Table meaning of each codon, including ones dropped from the chain.
    pub fn codon_meanings(&self) -> Vec<(String, AminoAcidCode)> {
        self.codons
            .iter()
            .map(|codon| (codon.clone(), codon_table::lookup(codon)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon_table::AminoAcid::*;
    use crate::sequence::{generate, MAX_LENGTH, MIN_LENGTH};

    #[test]
    fn test_segment_prepends_start() {
        assert_eq!(segment("AUCGAU"), vec!["AUG", "AUC", "GAU"]);
        assert_eq!(segment("AUGAAGGGC"), vec!["AUG", "AUG", "AAG", "GGC"]);
        assert_eq!(segment(""), vec!["AUG"]);
        assert_eq!(segment("CCC")[0], "AUG");
    }

    #[test]
    fn test_segment_removes_stop_codons() {
        assert_eq!(segment("AUCGAUUAA"), vec!["AUG", "AUC", "GAU"]);
        assert_eq!(segment("GGGUAG"), vec!["AUG", "GGG"]);
        assert_eq!(segment("UGAUAAUAG"), vec!["AUG"]);
        // Survivors keep their order
        assert_eq!(segment("CCCUAAGGGUGAAAA"), vec!["AUG", "CCC", "GGG", "AAA"]);
    }

    #[test]
    fn test_segment_keeps_short_fragment() {
        assert_eq!(segment("AUGAA"), vec!["AUG", "AUG", "AA"]);
        assert_eq!(segment("C"), vec!["AUG", "C"]);
    }

    #[test]
    fn test_segment_never_yields_stop() {
        for _ in 0..50 {
            let rna = transcribe(&generate(MAX_LENGTH)).unwrap();
            let codons = segment(&rna);
            assert_eq!(codons[0], "AUG");
            assert!(codons.iter().all(|c| !codon_table::is_stop_codon(c)));
        }
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate(&["AUG", "UUU", "CCC", "UAA"]), vec![Met, Phe, Pro]);
        assert_eq!(translate(&["AUG", "XYZ", "AA", "GGC"]), vec![Met, Gly]);
        assert!(translate::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_assemble() {
        assert_eq!(assemble(&[]), "");
        assert_eq!(assemble(&[Met]), "Met");
        assert_eq!(assemble(&[Met, Lys]), "Met-Lys");
        assert_eq!(assemble(&[Met, Met, Lys, Gly]), "Met-Met-Lys-Gly");
    }

    #[test]
    fn test_complete_workflow() {
        let dna = "TACTTCCCG";
        let rna = transcribe(dna).unwrap();
        assert_eq!(rna, "AUGAAGGGC");

        let codons = segment(&rna);
        assert_eq!(codons, vec!["AUG", "AUG", "AAG", "GGC"]);

        let amino_acids = translate(&codons);
        assert_eq!(amino_acids, vec![Met, Met, Lys, Gly]);

        assert_eq!(assemble(&amino_acids), "Met-Met-Lys-Gly");
    }

    #[test]
    fn test_workflow_with_stop_codon() {
        let rna = transcribe("TACTTCATT").unwrap();
        assert_eq!(rna, "AUGAAGUAA");

        let codons = segment(&rna);
        assert_eq!(codons, vec!["AUG", "AUG", "AAG"]);
        assert_eq!(translate(&codons), vec![Met, Met, Lys]);
    }

    #[test]
    fn test_translation_record() {
        let t = Translation::from_dna("atgttcccg").unwrap();
        assert_eq!(t.dna, "ATGTTCCCG");
        assert_eq!(t.rna, "UACAAGGGC");
        assert_eq!(t.codons, vec!["AUG", "UAC", "AAG", "GGC"]);
        assert_eq!(t.amino_acids, vec![Met, Tyr, Lys, Gly]);
        assert_eq!(t.protein_chain, "Met-Tyr-Lys-Gly");
        assert_eq!(t.source, SequenceSource::Custom("atgttcccg".into()));
    }

    #[test]
    fn test_translation_rejects_invalid_dna() {
        assert_eq!(Translation::from_dna("ATCG"), Err(SequenceError::LengthOutOfRange(4)));
        assert!(Translation::from_dna("ATCGATCGU").is_err());
        assert!(Translation::new(SequenceSource::Random(10)).is_err());
    }

    #[test]
    fn test_translation_from_random() {
        for length in (MIN_LENGTH..=MAX_LENGTH).step_by(3) {
            let t = Translation::new(SequenceSource::Random(length)).unwrap();
            assert_eq!(t.dna.len(), length);
            assert_eq!(t.rna.len(), length);
            assert!(t.amino_acids.len() <= length / 3 + 1);
            assert!(t.protein_chain.starts_with("Met"));
        }
    }

    #[test]
    fn test_distinct_amino_acids() {
        let t = Translation::from_dna("TACTTCCCG").unwrap();
        assert_eq!(t.distinct_amino_acids(), vec![Met, Lys, Gly]);
    }

    #[test]
    fn test_codon_meanings() {
        let t = Translation::from_dna("TACTTCCCG").unwrap();
        let meanings = t.codon_meanings();
        assert_eq!(meanings.len(), 4);
        assert_eq!(meanings[2], ("AAG".to_string(), AminoAcidCode::Amino(Lys)));
    }
}
