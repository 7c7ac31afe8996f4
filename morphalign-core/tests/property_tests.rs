//! Property tests for the aligners

use morphalign_core::*;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-eé]{0,12}"
}

fn morphemes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-eé]{0,6}", 0..5)
}

proptest! {
    #[test]
    fn test_reconstruction_identity(word in word(), morphemes in morphemes()) {
        let morphemes: Vec<&str> = morphemes.iter().map(String::as_str).collect();

        let optimal = OptimalAligner.align(&word, &morphemes).unwrap();
        prop_assert_eq!(optimal.reconstruct(), word.clone());
        prop_assert_eq!(optimal.aligned_string().replace(' ', ""), word.clone());

        let greedy = align_greedy(&word, &morphemes).unwrap();
        prop_assert_eq!(greedy.replace(' ', ""), word);
    }

    #[test]
    fn test_alignment_parallels_morphs(word in word(), morphemes in morphemes()) {
        let morphemes: Vec<&str> = morphemes.iter().map(String::as_str).collect();
        let alignment = OptimalAligner.align(&word, &morphemes).unwrap();

        prop_assert_eq!(alignment.morphs().len(), alignment.slots().len());
        prop_assert!(alignment.morphs().iter().all(|morph| !morph.is_empty()));
        if !word.is_empty() {
            prop_assert_eq!(alignment.aligned_string().split(' ').count(), alignment.slots().len());
        }

        // Only the first morph may be unaligned, and morphemes are used in order.
        prop_assert!(alignment.slots().iter().skip(1).all(Option::is_some));
        let indices: Vec<usize> = alignment.slots().iter().flatten().copied().collect();
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(indices.iter().all(|&index| index < morphemes.len()));
    }

    #[test]
    fn test_optimal_covers_at_least_greedy(word in word(), morphemes in morphemes()) {
        let morphemes: Vec<&str> = morphemes.iter().map(String::as_str).collect();
        let optimal = OptimalAligner.align(&word, &morphemes).unwrap();
        let greedy = GreedyAligner.align(&word, &morphemes).unwrap();

        prop_assert!(optimal.score() >= greedy.score());
        prop_assert!(optimal.score() <= word.chars().count());
    }

    #[test]
    fn test_single_morpheme_equal_to_word(word in "[a-zé]{1,12}") {
        let (aligned, alignment) = align_optimal(&word, &[word.as_str()]).unwrap();
        prop_assert_eq!(aligned, word);
        prop_assert_eq!(alignment, vec![Some(0)]);
    }

    #[test]
    fn test_concatenated_morphemes_are_recovered(parts in prop::collection::vec("[a-z]{1,5}", 1..5)) {
        let word = parts.concat();
        let alignment = OptimalAligner
            .align(&word, &parts.iter().map(String::as_str).collect::<Vec<_>>())
            .unwrap();
        prop_assert_eq!(alignment.score(), word.chars().count());
    }
}
