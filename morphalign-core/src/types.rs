//! Alignment result types

use std::fmt;

/// Which morpheme produced a morph; `None` marks unaligned leading material
pub type MorphemeSlot = Option<usize>;

/// A segmentation of a surface word into morphs, each tied to at most one morpheme
///
/// Morphs are substrings of the original (non-normalized) word, in order.
/// `slots[j]` is the index into the morpheme list that produced `morphs[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    morphs: Vec<String>,
    slots: Vec<MorphemeSlot>,
    score: usize,
}

impl Alignment {
    /// Create an alignment from parallel morph and slot lists
    pub fn new(morphs: Vec<String>, slots: Vec<MorphemeSlot>, score: usize) -> Self {
        debug_assert_eq!(morphs.len(), slots.len(), "morphs and slots must be parallel");
        Self {
            morphs,
            slots,
            score,
        }
    }

    /// Alignment of the empty word
    pub fn empty() -> Self {
        Self::default()
    }

    /// The morphs, left to right
    pub fn morphs(&self) -> &[String] {
        &self.morphs
    }

    /// Morpheme index per morph
    pub fn slots(&self) -> &[MorphemeSlot] {
        &self.slots
    }

    /// Number of word characters explained by morpheme prefixes
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of morphs
    pub fn len(&self) -> usize {
        self.morphs.len()
    }

    /// True for the empty word
    pub fn is_empty(&self) -> bool {
        self.morphs.is_empty()
    }

    /// True when no morpheme matched: the whole word is one unaligned morph
    pub fn is_degenerate(&self) -> bool {
        self.slots.len() == 1 && self.slots[0].is_none()
    }

    /// Morphs joined by single spaces
    pub fn aligned_string(&self) -> String {
        self.morphs.join(" ")
    }

    /// Concatenation of all morphs, which is the original word
    pub fn reconstruct(&self) -> String {
        self.morphs.concat()
    }

    /// Split into owned parts
    pub fn into_parts(self) -> (Vec<String>, Vec<MorphemeSlot>, usize) {
        (self.morphs, self.slots, self.score)
    }

    /// Indices of the morphemes that own no morph
    pub fn dropped_morphemes(&self, morpheme_count: usize) -> Vec<usize> {
        (0..morpheme_count)
            .filter(|index| !self.slots.contains(&Some(*index)))
            .collect()
    }

    /// Distribute the morphs over the morphemes they came from.
    ///
    /// Returns one string per morpheme, empty for dropped morphemes. Unaligned
    /// leading material is prepended to the first aligned morph. A degenerate
    /// alignment is attributed to morpheme 0 in its entirety.
    pub fn morphs_per_morpheme(&self, morpheme_count: usize) -> Vec<String> {
        let mut assigned = vec![String::new(); morpheme_count];
        if morpheme_count == 0 {
            return assigned;
        }

        if self.is_degenerate() {
            assigned[0].push_str(&self.morphs[0]);
            return assigned;
        }

        let mut leading = String::new();
        for (morph, slot) in self.morphs.iter().zip(&self.slots) {
            match slot.and_then(|index| assigned.get_mut(index)) {
                Some(target) => {
                    target.push_str(&leading);
                    target.push_str(morph);
                    leading.clear();
                }
                None => leading.push_str(morph),
            }
        }

        assigned
    }

    /// Split hyphens off the end of morphs into units of their own.
    ///
    /// `"centr aal- aziatisch"` becomes `["centr", "aal", "-", "aziatisch"]`.
    /// A hyphen inside a morph, or at the end of the word, stays attached.
    /// The result no longer lines up with [`Alignment::slots`].
    pub fn hyphen_split(&self) -> Vec<String> {
        let last = self.morphs.len().saturating_sub(1);
        let mut units = Vec::with_capacity(self.morphs.len() + 1);

        for (position, morph) in self.morphs.iter().enumerate() {
            match morph.strip_suffix('-') {
                Some(stem) if position < last && !stem.is_empty() => {
                    units.push(stem.to_string());
                    units.push("-".to_string());
                }
                _ => units.push(morph.clone()),
            }
        }

        units
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.aligned_string())
    }
}
