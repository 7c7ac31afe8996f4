//! Words paired with the morphemes they are built from

use crate::error::Result;
use morphalign_engine::AlignmentRequest;

/// A word with its ordered morpheme decomposition
///
/// Implement this for lexicon entries to get their morph split for free.
pub trait WordDecomposition {
    /// The surface form
    fn word(&self) -> &str;

    /// The morphemes, in order of concatenation
    fn decompose(&self) -> Vec<String>;

    /// Morph split of [`word`](Self::word) found by optimal alignment
    fn segment(&self) -> Result<Vec<String>> {
        crate::segment(self.word(), &self.decompose())
    }

    /// Engine request for this word
    fn to_request(&self) -> AlignmentRequest {
        AlignmentRequest::new(self.word(), self.decompose())
    }
}

/// Owned word and morpheme list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition {
    /// Surface form
    pub word: String,
    /// Morphemes in order
    pub morphemes: Vec<String>,
}

impl Decomposition {
    /// Create a decomposition
    pub fn new<I, S>(word: impl Into<String>, morphemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            word: word.into(),
            morphemes: morphemes.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordDecomposition for Decomposition {
    fn word(&self) -> &str {
        &self.word
    }

    fn decompose(&self) -> Vec<String> {
        self.morphemes.clone()
    }
}

impl From<Decomposition> for AlignmentRequest {
    fn from(decomposition: Decomposition) -> Self {
        AlignmentRequest {
            word: decomposition.word,
            morphemes: decomposition.morphemes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LexiconEntry {
        lemma: &'static str,
        parts: &'static str,
    }

    impl WordDecomposition for LexiconEntry {
        fn word(&self) -> &str {
            self.lemma
        }

        fn decompose(&self) -> Vec<String> {
            self.parts.split('+').map(str::to_string).collect()
        }
    }

    #[test]
    fn test_segment_via_trait() {
        let entry = LexiconEntry {
            lemma: "kolencentrale",
            parts: "kool+en+centrum+aal+e",
        };
        assert_eq!(entry.segment().unwrap(), vec!["kol", "en", "centr", "al", "e"]);
    }

    #[test]
    fn test_request_conversion() {
        let decomposition = Decomposition::new("élégance", ["elegant", "nce"]);
        assert_eq!(
            decomposition.to_request(),
            AlignmentRequest::from(decomposition.clone())
        );
        assert_eq!(decomposition.segment().unwrap(), vec!["éléga", "nce"]);
    }
}
