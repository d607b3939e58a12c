use serde::Serialize;
use std::fmt;

/// A protein sequence reduced to its alphabetic characters.
///
/// Cleaning silently drops every character that is not a letter (whitespace,
/// digits, punctuation, FASTA line breaks) and keeps the remaining letters in
/// their original order and case. Cleaning an already clean sequence is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProteinSequence(String);

impl ProteinSequence {
    pub fn clean(raw: &str) -> Self {
        Self(clean_sequence(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residues (letters) in the sequence.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_uppercase(&self) -> Self {
        Self(self.0.to_uppercase())
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProteinSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn clean_sequence(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphabetic()).collect()
}
