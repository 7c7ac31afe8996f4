//! Dense search grid for the optimal aligner
//!
//! Node `(i, k)` holds the best way found so far to explain the first `i`
//! characters of the word having used up the first `k` morphemes. The grid
//! is one flat allocation; backpointers are index pairs into it.

use smallvec::SmallVec;
use std::ops::RangeInclusive;

/// Grid coordinate: (characters explained, morphemes consumed)
pub type NodeIndex = (usize, usize);

/// Path through the trellis, terminal node first
pub type Trace = SmallVec<[NodeIndex; 16]>;

/// One cell of the trellis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrellisNode {
    /// Best score reaching this node; `None` while unreached, which orders
    /// below every reached score including zero
    pub score: Option<usize>,
    /// Predecessor on the best path found so far
    pub backpointer: Option<NodeIndex>,
}

/// `(chars + 1) x (morphemes + 1)` grid of nodes
#[derive(Debug, Clone)]
pub struct Trellis {
    n_chars: usize,
    n_morphemes: usize,
    nodes: Vec<TrellisNode>,
}

impl Trellis {
    /// Allocate the grid with every `(0, k)` reached at score 0
    pub fn new(n_chars: usize, n_morphemes: usize) -> Self {
        let rows = n_morphemes + 1;
        let mut nodes = vec![TrellisNode::default(); (n_chars + 1) * rows];
        for node in nodes.iter_mut().take(rows) {
            node.score = Some(0);
        }

        Self {
            n_chars,
            n_morphemes,
            nodes,
        }
    }

    /// Number of characters in the word
    pub fn n_chars(&self) -> usize {
        self.n_chars
    }

    /// Number of morphemes offered
    pub fn n_morphemes(&self) -> usize {
        self.n_morphemes
    }

    #[inline]
    fn offset(&self, (char_idx, consumed): NodeIndex) -> usize {
        debug_assert!(char_idx <= self.n_chars && consumed <= self.n_morphemes);
        char_idx * (self.n_morphemes + 1) + consumed
    }

    /// Node at the given coordinate
    pub fn node(&self, index: NodeIndex) -> &TrellisNode {
        &self.nodes[self.offset(index)]
    }

    /// Offer `score` to node `to` via `from`.
    ///
    /// Only a strictly better score replaces the current one, so the first
    /// predecessor to reach a given score keeps the backpointer. Returns
    /// whether the node improved.
    pub fn relax(&mut self, from: NodeIndex, to: NodeIndex, score: usize) -> bool {
        let offset = self.offset(to);
        let node = &mut self.nodes[offset];
        if node.score >= Some(score) {
            return false;
        }

        node.score = Some(score);
        node.backpointer = Some(from);
        true
    }

    /// Best node in the final column.
    ///
    /// Ties on score go to the node that consumed the most morphemes.
    pub fn best_terminal(&self) -> NodeIndex {
        let consumed = (0..=self.n_morphemes)
            .max_by_key(|&k| (self.node((self.n_chars, k)).score, k))
            .unwrap_or(0);
        (self.n_chars, consumed)
    }

    /// Follow backpointers from `terminal` to the node where the path starts
    pub fn trace(&self, terminal: NodeIndex) -> Trace {
        let mut path = Trace::new();
        let mut current = terminal;
        path.push(current);

        while let Some(previous) = self.node(current).backpointer {
            path.push(previous);
            current = previous;
        }

        path
    }
}

/// Every prefix of one normalized morpheme, including the empty one and the full string
///
/// Prefixes are kept implicitly as lengths into the morpheme's characters.
#[derive(Debug, Clone)]
pub struct PrefixVocabulary {
    chars: Vec<char>,
}

impl PrefixVocabulary {
    /// Build the vocabulary of a normalized morpheme
    pub fn new(normalized: &str) -> Self {
        Self {
            chars: normalized.chars().collect(),
        }
    }

    /// Length of the full morpheme
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for the empty morpheme, whose only prefix is the empty one
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Lengths of the prefixes that `text` starts with, shortest first.
    ///
    /// Always contains 0.
    pub fn matching_lengths(&self, text: &[char]) -> RangeInclusive<usize> {
        let common = self
            .chars
            .iter()
            .zip(text)
            .take_while(|(a, b)| a == b)
            .count();
        0..=common
    }
}
