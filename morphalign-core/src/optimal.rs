//! Optimal morpheme alignment by exact trellis search
//!
//! The search state is a pair (characters explained, morphemes consumed).
//! Which prefixes may be matched next depends on how many morphemes the path
//! has already consumed, so the consumed count is part of the node rather
//! than something resolved after the fact. With that state the problem is a
//! longest path on a DAG and a single forward sweep solves it exactly.
//!
//! Transitions out of node `(i, k)`:
//! - match any prefix `p` of morpheme `k` (the empty one included) at
//!   position `i`, landing on `(i + |p|, k + 1)` and scoring `|p|`
//! - skip ahead to any `(i', k)` with `i' > i`, scoring nothing
//! - once all morphemes are consumed, jump straight to `(n, m)`

use crate::{
    error::Result,
    normalizer::{normalize, normalize_chars},
    traits::{Aligner, AlignmentStrategy},
    trellis::{NodeIndex, PrefixVocabulary, Trellis},
    types::{Alignment, MorphemeSlot},
};
use tracing::{debug, trace};

/// Exact aligner maximizing the number of characters explained by morpheme prefixes
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalAligner;

impl OptimalAligner {
    /// Run the forward sweep over a normalized word and per-morpheme vocabularies
    pub fn search(word: &[char], vocabularies: &[PrefixVocabulary]) -> Trellis {
        let n_chars = word.len();
        let n_morphemes = vocabularies.len();
        let mut trellis = Trellis::new(n_chars, n_morphemes);

        trace!(n_chars, n_morphemes, "searching alignment trellis");

        // Column n is only ever written to.
        for char_idx in 0..n_chars {
            for consumed in 0..=n_morphemes {
                let from = (char_idx, consumed);
                let Some(score) = trellis.node(from).score else {
                    continue;
                };

                if consumed < n_morphemes {
                    for length in vocabularies[consumed].matching_lengths(&word[char_idx..]) {
                        let to = (char_idx + length, consumed + 1);
                        Self::offer(&mut trellis, from, to, score + length);
                    }

                    for next_idx in char_idx + 1..=n_chars {
                        Self::offer(&mut trellis, from, (next_idx, consumed), score);
                    }
                } else {
                    Self::offer(&mut trellis, from, (n_chars, n_morphemes), score);
                }
            }
        }

        trellis
    }

    /// Relax one edge; a node's score only ever grows
    #[inline]
    fn offer(trellis: &mut Trellis, from: NodeIndex, to: NodeIndex, score: usize) {
        let before = trellis.node(to).score;
        trellis.relax(from, to, score);
        let after = trellis.node(to).score;
        debug_assert!(
            after >= before && after >= Some(score),
            "trellis score at {to:?} went from {before:?} to {after:?} after offering {score}"
        );
    }

    /// Read the best path back out of a searched trellis.
    ///
    /// `original` is the non-normalized word; morph text is taken from it.
    pub fn backtrace(trellis: &Trellis, original: &[char]) -> Alignment {
        debug_assert_eq!(trellis.n_chars(), original.len());

        let terminal = trellis.best_terminal();
        let score = trellis.node(terminal).score.unwrap_or(0);
        let path = trellis.trace(terminal);

        let mut morphs: Vec<String> = Vec::new();
        let mut slots: Vec<MorphemeSlot> = Vec::new();
        // Skipped text waiting for the morph that precedes it
        let mut pending = String::new();

        for step in path.windows(2) {
            let (char_idx, consumed) = step[0];
            let (prev_char_idx, prev_consumed) = step[1];

            let text: String = original[prev_char_idx..char_idx].iter().collect();
            pending.insert_str(0, &text);

            let starts_morph = prev_consumed != consumed && prev_char_idx != char_idx;
            if starts_morph {
                morphs.push(std::mem::take(&mut pending));
                slots.push(Some(prev_consumed));
            }
        }

        // Text before the first matched morpheme belongs to no morpheme
        if !pending.is_empty() {
            morphs.push(pending);
            slots.push(None);
        }

        morphs.reverse();
        slots.reverse();
        Alignment::new(morphs, slots, score)
    }
}

impl Aligner for OptimalAligner {
    fn align(&self, word: &str, morphemes: &[&str]) -> Result<Alignment> {
        let normalized = normalize_chars(word)?;
        let vocabularies: Vec<PrefixVocabulary> = morphemes
            .iter()
            .map(|morpheme| PrefixVocabulary::new(&normalize(morpheme)))
            .collect();

        let trellis = Self::search(&normalized, &vocabularies);
        let original: Vec<char> = word.chars().collect();
        let alignment = Self::backtrace(&trellis, &original);

        debug!(
            word,
            aligned = %alignment,
            score = alignment.score(),
            "aligned word"
        );
        Ok(alignment)
    }

    fn strategy(&self) -> AlignmentStrategy {
        AlignmentStrategy::Optimal
    }
}

/// Align `word` against `morphemes` optimally.
///
/// Returns the word with spaces at morph boundaries and, per morph, the index
/// of the morpheme that produced it (`None` for unaligned leading material).
///
/// ```
/// use morphalign_core::align_optimal;
///
/// let (aligned, alignment) =
///     align_optimal("kolencentrale", &["kool", "en", "centrum", "aal", "e"]).unwrap();
/// assert_eq!(aligned, "kol en centr al e");
/// assert_eq!(alignment, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
/// ```
pub fn align_optimal<S: AsRef<str>>(
    word: &str,
    morphemes: &[S],
) -> Result<(String, Vec<MorphemeSlot>)> {
    let morphemes: Vec<&str> = morphemes.iter().map(AsRef::as_ref).collect();
    let alignment = OptimalAligner.align(word, &morphemes)?;
    let aligned = alignment.aligned_string();
    let (_, slots, _) = alignment.into_parts();
    Ok((aligned, slots))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align(word: &str, morphemes: &[&str]) -> Alignment {
        OptimalAligner.align(word, morphemes).unwrap()
    }

    #[test]
    fn test_kolencentrale() {
        let a = align("kolencentrale", &["kool", "en", "centrum", "aal", "e"]);
        assert_eq!(a.aligned_string(), "kol en centr al e");
        assert_eq!(a.slots(), &[Some(0), Some(1), Some(2), Some(3), Some(4)]);
        // "ko" + "en" + "centr" + "a" + "e"; the skipped "l"s ride along
        assert_eq!(a.score(), 11);
    }

    #[test]
    fn test_accents_matched_but_original_characters_returned() {
        let a = align("élégance", &["elegant", "nce"]);
        assert_eq!(a.morphs(), &["éléga".to_string(), "nce".to_string()]);
        assert_eq!(a.slots(), &[Some(0), Some(1)]);
        assert_eq!(a.score(), 8);
    }

    #[test]
    fn test_no_morphemes() {
        let a = align("abc", &[]);
        assert_eq!(a.aligned_string(), "abc");
        assert_eq!(a.slots(), &[None]);
        assert_eq!(a.score(), 0);
    }

    #[test]
    fn test_unmatchable_morpheme_is_reported_unaligned() {
        let a = align("ab", &["x"]);
        assert_eq!(a.aligned_string(), "ab");
        assert_eq!(a.slots(), &[None]);
        assert!(a.is_degenerate());
        assert_eq!(a.dropped_morphemes(1), vec![0]);
    }

    #[test]
    fn test_identity() {
        let a = align("metastasize", &["metastasize"]);
        assert_eq!(a.aligned_string(), "metastasize");
        assert_eq!(a.slots(), &[Some(0)]);
    }

    #[test]
    fn test_leading_unaligned_material() {
        let a = align("xxabc", &["abc"]);
        assert_eq!(a.morphs(), &["xx".to_string(), "abc".to_string()]);
        assert_eq!(a.slots(), &[None, Some(0)]);
    }

    #[test]
    fn test_skipped_text_glues_to_previous_morph() {
        let a = align("abxxcd", &["ab", "cd"]);
        assert_eq!(a.aligned_string(), "abxx cd");
        assert_eq!(a.slots(), &[Some(0), Some(1)]);
    }

    #[test]
    fn test_trailing_text_glues_to_last_morph() {
        let a = align("abcd", &["ab"]);
        assert_eq!(a.aligned_string(), "abcd");
        assert_eq!(a.slots(), &[Some(0)]);
        assert_eq!(a.score(), 2);
    }

    #[test]
    fn test_dropped_middle_morpheme() {
        let a = align("abcd", &["ab", "zz", "cd"]);
        assert_eq!(a.aligned_string(), "ab cd");
        assert_eq!(a.slots(), &[Some(0), Some(2)]);
        assert_eq!(a.dropped_morphemes(3), vec![1]);
    }

    #[test]
    fn test_empty_morphemes_are_tolerated() {
        let a = align("abcd", &["", "ab", "", "cd"]);
        assert_eq!(a.aligned_string(), "ab cd");
        assert_eq!(a.slots(), &[Some(1), Some(3)]);
    }

    #[test]
    fn test_repeated_morphemes_are_distinct_by_position() {
        let a = align("lala", &["la", "la"]);
        assert_eq!(a.aligned_string(), "la la");
        assert_eq!(a.slots(), &[Some(0), Some(1)]);
    }

    #[test]
    fn test_case_insensitive() {
        let a = align("AmsterDam", &["amster", "dam"]);
        assert_eq!(a.aligned_string(), "Amster Dam");
    }

    #[test]
    fn test_empty_word() {
        let a = align("", &["a", "b"]);
        assert!(a.is_empty());
        assert_eq!(a.aligned_string(), "");
    }

    #[test]
    fn test_length_changing_word_fails_fast() {
        assert!(OptimalAligner.align("\u{fb01}n", &["fin"]).is_err());
    }

    #[test]
    fn test_align_optimal_shape() {
        let (aligned, alignment) = align_optimal("élégance", &["elegant", "nce"]).unwrap();
        assert_eq!(aligned, "éléga nce");
        assert_eq!(alignment, vec![Some(0), Some(1)]);

        let owned = vec!["ab".to_string()];
        let (aligned, alignment) = align_optimal("ab", &owned).unwrap();
        assert_eq!(aligned, "ab");
        assert_eq!(alignment, vec![Some(0)]);
    }

    #[test]
    fn test_search_scores_never_decrease_along_columns() {
        let word: Vec<char> = "kolencentrale".chars().collect();
        let vocabularies: Vec<PrefixVocabulary> = ["kool", "en", "centrum", "aal", "e"]
            .iter()
            .map(|m| PrefixVocabulary::new(m))
            .collect();
        let trellis = OptimalAligner::search(&word, &vocabularies);

        // Skips carry a node's score forward unchanged
        for consumed in 0..=trellis.n_morphemes() {
            for char_idx in 1..=trellis.n_chars() {
                let previous = trellis.node((char_idx - 1, consumed)).score;
                if previous.is_some() && consumed < trellis.n_morphemes() {
                    assert!(trellis.node((char_idx, consumed)).score >= previous);
                }
            }
        }
        assert_eq!(trellis.node(trellis.best_terminal()).score, Some(11));
    }

    #[test]
    fn test_search_scores() {
        let word: Vec<char> = "abc".chars().collect();
        let vocabularies = vec![PrefixVocabulary::new("ab")];
        let trellis = OptimalAligner::search(&word, &vocabularies);

        assert_eq!(trellis.node((2, 1)).score, Some(2));
        assert_eq!(trellis.node((3, 1)).score, Some(2));
        assert_eq!(trellis.node((3, 0)).score, Some(0));
        assert_eq!(trellis.best_terminal(), (3, 1));
    }
}
