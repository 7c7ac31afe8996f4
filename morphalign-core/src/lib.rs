//! Morpheme-to-surface-form alignment
//!
//! Given a word and the ordered list of morphemes it was formed from, find
//! the contiguous substrings ("morphs") of the word that each morpheme
//! accounts for. Morphemes rarely appear verbatim: they get truncated
//! (`kool` -> `kol`), lose accents, or are dropped entirely, and extra
//! characters show up between them.
//!
//! # Architecture
//!
//! - **Normalizer**: case- and accent-insensitive comparison form that keeps
//!   one character per original character
//! - **Optimal aligner**: exact search over a (position, morphemes consumed)
//!   trellis maximizing the number of characters explained by morpheme prefixes
//! - **Greedy aligner**: single left-to-right pass, kept as a reference
//!
//! Every call builds its own trellis and drops it on return, so independent
//! words can be aligned from as many threads as the caller likes.
//!
//! # Example
//!
//! ```rust
//! use morphalign_core::{align_greedy, align_optimal};
//!
//! let (aligned, alignment) = align_optimal("élégance", &["elegant", "nce"]).unwrap();
//! assert_eq!(aligned, "éléga nce");
//! assert_eq!(alignment, vec![Some(0), Some(1)]);
//!
//! // The greedy pass lets "elegant" swallow the "n" of "nce".
//! assert_eq!(align_greedy("élégance", &["elegant", "nce"]).unwrap(), "élégance");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod greedy;
pub mod normalizer;
pub mod optimal;
pub mod traits;
pub mod trellis;
pub mod types;

pub use error::{CoreError, Result};
pub use greedy::{align_greedy, GreedyAligner};
pub use normalizer::{normalize, normalize_chars};
pub use optimal::{align_optimal, OptimalAligner};
pub use traits::{Aligner, AlignmentStrategy};
pub use trellis::{PrefixVocabulary, Trellis, TrellisNode};
pub use types::{Alignment, MorphemeSlot};
