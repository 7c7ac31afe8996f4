//! Public API for morpheme-to-surface-form alignment
//!
//! This crate provides a stable interface over the alignment engine: a
//! [`MorphAligner`] facade, serializable result DTOs, TOML-loadable
//! configuration and the [`WordDecomposition`] trait for lexicon entries.
//!
//! ```rust
//! use morphalign_api::{segment, MorphAligner};
//!
//! let aligner = MorphAligner::new().unwrap();
//! let result = aligner.align("élégance", &["elegant", "nce"]).unwrap();
//! assert_eq!(result.aligned, "éléga nce");
//! assert_eq!(result.alignment, vec![Some(0), Some(1)]);
//!
//! assert_eq!(
//!     segment("kolencentrale", &["kool", "en", "centrum", "aal", "e"]).unwrap(),
//!     vec!["kol", "en", "centr", "al", "e"]
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod decomposition;
pub mod dto;
pub mod error;

use morphalign_core::{Aligner, GreedyAligner};
use morphalign_engine::{AlignmentProcessor, AlignmentRequest};
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder, ExecutionMode, Strategy};
pub use decomposition::{Decomposition, WordDecomposition};
pub use dto::{AlignmentDTO, Metadata, Output};
pub use error::{ApiError, Result};
pub use morphalign_core::MorphemeSlot;

/// Main entry point for morpheme alignment
///
/// Wraps an engine processor; cheap to share across threads.
#[derive(Debug)]
pub struct MorphAligner {
    inner: AlignmentProcessor,
    config: Config,
}

impl MorphAligner {
    /// Create an aligner with default configuration (optimal, adaptive)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an aligner with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = AlignmentProcessor::with_config(config.to_engine_config())?;
        Ok(Self { inner, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Align one word with the configured strategy
    pub fn align<S: AsRef<str>>(&self, word: &str, morphemes: &[S]) -> Result<AlignmentDTO> {
        let alignment = self.inner.align(word, morphemes)?;
        Ok(AlignmentDTO::from_alignment(word, alignment))
    }

    /// Align one word with the greedy reference algorithm, bypassing the cache
    pub fn align_greedy<S: AsRef<str>>(
        &self,
        word: &str,
        morphemes: &[S],
    ) -> Result<AlignmentDTO> {
        let morphemes: Vec<&str> = morphemes.iter().map(AsRef::as_ref).collect();
        let alignment = GreedyAligner.align(word, &morphemes)?;
        Ok(AlignmentDTO::from_alignment(word, alignment))
    }

    /// Align many words at once
    pub fn align_batch<D: WordDecomposition>(&self, words: &[D]) -> Result<Output> {
        let requests: Vec<AlignmentRequest> = words.iter().map(|w| w.to_request()).collect();
        let output = self.inner.align_batch(&requests)?;

        let metadata = Metadata::from(&output.metadata);
        debug!(
            requests = metadata.requests,
            dropped = metadata.dropped_morphemes,
            "batch finished"
        );

        let alignments = requests
            .into_iter()
            .zip(output.alignments)
            .map(|(request, alignment)| AlignmentDTO::from_alignment(request.word, alignment))
            .collect();

        Ok(Output {
            alignments,
            metadata,
        })
    }

    /// Morph split of a word, with hyphens split off if configured
    pub fn segment<S: AsRef<str>>(&self, word: &str, morphemes: &[S]) -> Result<Vec<String>> {
        Ok(self.inner.segment(word, morphemes)?)
    }
}

// Convenience functions

/// Optimal alignment: the word with spaces at morph boundaries, and per
/// morph the index of its morpheme (`None` for unaligned leading material)
pub fn align_optimal<S: AsRef<str>>(
    word: &str,
    morphemes: &[S],
) -> Result<(String, Vec<MorphemeSlot>)> {
    Ok(morphalign_core::align_optimal(word, morphemes)?)
}

/// Greedy alignment: the word with spaces at morph boundaries
pub fn align_greedy<S: AsRef<str>>(word: &str, morphemes: &[S]) -> Result<String> {
    Ok(morphalign_core::align_greedy(word, morphemes)?)
}

/// Optimal morph split of a word
pub fn segment<S: AsRef<str>>(word: &str, morphemes: &[S]) -> Result<Vec<String>> {
    let morphemes: Vec<&str> = morphemes.iter().map(AsRef::as_ref).collect();
    let alignment = morphalign_core::OptimalAligner.align(word, &morphemes)?;
    Ok(alignment.into_parts().0)
}
