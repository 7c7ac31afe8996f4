//! Aligner abstraction

use crate::{
    error::Result, greedy::GreedyAligner, optimal::OptimalAligner, types::Alignment,
};

/// Segments a surface word into morphs, one per matched morpheme
pub trait Aligner: Send + Sync {
    /// Align `word` against the ordered `morphemes`
    fn align(&self, word: &str, morphemes: &[&str]) -> Result<Alignment>;

    /// Which algorithm this aligner runs
    fn strategy(&self) -> AlignmentStrategy;
}

/// Alignment algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AlignmentStrategy {
    /// Exact trellis search maximizing matched characters
    #[default]
    Optimal,
    /// Single left-to-right pass; fast, but wrong when a morph's tail looks like the next morpheme
    Greedy,
}

impl AlignmentStrategy {
    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            AlignmentStrategy::Optimal => "optimal",
            AlignmentStrategy::Greedy => "greedy",
        }
    }

    /// Parse a strategy name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "optimal" | "viterbi" => Some(AlignmentStrategy::Optimal),
            "greedy" => Some(AlignmentStrategy::Greedy),
            _ => None,
        }
    }

    /// The aligner implementing this strategy
    pub fn aligner(&self) -> &'static dyn Aligner {
        match self {
            AlignmentStrategy::Optimal => &OptimalAligner,
            AlignmentStrategy::Greedy => &GreedyAligner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        assert_eq!(AlignmentStrategy::default(), AlignmentStrategy::Optimal);
        assert_eq!(
            AlignmentStrategy::from_name("Viterbi"),
            Some(AlignmentStrategy::Optimal)
        );
        assert_eq!(
            AlignmentStrategy::from_name("greedy"),
            Some(AlignmentStrategy::Greedy)
        );
        assert_eq!(AlignmentStrategy::from_name("fuzzy"), None);
        assert_eq!(AlignmentStrategy::Greedy.name(), "greedy");
    }

    #[test]
    fn test_aligner_dispatch() {
        for strategy in [AlignmentStrategy::Optimal, AlignmentStrategy::Greedy] {
            assert_eq!(strategy.aligner().strategy(), strategy);
        }
    }
}
