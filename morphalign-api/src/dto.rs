//! Data Transfer Objects for API

#[cfg(feature = "serde")]
use crate::error::Result;
use morphalign_engine::{Alignment, BatchMetadata, MorphemeSlot};

/// One aligned word (FFI-safe DTO)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentDTO {
    /// The surface word as given
    pub word: String,
    /// The word with a space at every morph boundary
    pub aligned: String,
    /// Morphs in order
    pub morphs: Vec<String>,
    /// Per morph, the index of the morpheme it came from (null if unaligned)
    pub alignment: Vec<MorphemeSlot>,
    /// Number of characters explained by morpheme prefixes
    pub score: usize,
}

impl AlignmentDTO {
    /// Build from an engine alignment
    pub fn from_alignment(word: impl Into<String>, alignment: Alignment) -> Self {
        let aligned = alignment.aligned_string();
        let (morphs, slots, score) = alignment.into_parts();
        Self {
            word: word.into(),
            aligned,
            morphs,
            alignment: slots,
            score,
        }
    }

    /// True when no morpheme matched: the whole word is one unaligned morph
    pub fn is_degenerate(&self) -> bool {
        self.alignment.len() == 1 && self.alignment[0].is_none()
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Number of words aligned
    pub requests: usize,
    /// Words answered from the cache
    pub cache_hits: usize,
    /// Words where no morpheme matched
    pub degenerate: usize,
    /// Morphemes left without a morph
    pub dropped_morphemes: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Words per second
    pub throughput_wps: f64,
    /// Execution mode used
    pub mode_used: String,
    /// Algorithm used
    pub strategy: String,
}

impl From<&BatchMetadata> for Metadata {
    fn from(metadata: &BatchMetadata) -> Self {
        let seconds = metadata.processing_time.as_secs_f64();
        let throughput_wps = if seconds > 0.0 {
            metadata.requests as f64 / seconds
        } else {
            0.0
        };

        Self {
            requests: metadata.requests,
            cache_hits: metadata.cache_hits,
            degenerate: metadata.degenerate,
            dropped_morphemes: metadata.dropped_morphemes,
            processing_time_ms: metadata.processing_time.as_millis() as u64,
            throughput_wps,
            mode_used: metadata.mode_used.name().to_string(),
            strategy: metadata.strategy.name().to_string(),
        }
    }
}

/// Complete output with alignments and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// One entry per input word, in input order
    pub alignments: Vec<AlignmentDTO>,
    /// Processing metadata
    pub metadata: Metadata,
}

#[cfg(feature = "serde")]
impl Output {
    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
