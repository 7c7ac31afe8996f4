//! Alignment requests

/// A surface word and the ordered morphemes it is formed from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignmentRequest {
    /// Surface form
    pub word: String,
    /// Morphemes in order of concatenation
    pub morphemes: Vec<String>,
}

impl AlignmentRequest {
    /// Create a request
    pub fn new<W, I, S>(word: W, morphemes: I) -> Self
    where
        W: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            word: word.into(),
            morphemes: morphemes.into_iter().map(Into::into).collect(),
        }
    }

    /// Borrowed view of the morphemes, as the aligners take them
    pub fn morpheme_refs(&self) -> Vec<&str> {
        self.morphemes.iter().map(String::as_str).collect()
    }
}
