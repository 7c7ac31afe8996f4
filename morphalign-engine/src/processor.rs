//! Main alignment processor and builder

use crate::{
    cache::{AlignmentCache, CacheStats},
    config::EngineConfig,
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    request::AlignmentRequest,
};
use morphalign_core::{Aligner, Alignment, AlignmentStrategy};
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant},
};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Alignments of a batch with metadata
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// One alignment per request, in request order
    pub alignments: Vec<Alignment>,
    /// Processing metadata
    pub metadata: BatchMetadata,
}

/// Processing metadata
#[derive(Debug, Clone)]
pub struct BatchMetadata {
    /// Execution mode that was actually used
    pub mode_used: ExecutionMode,
    /// Algorithm used
    pub strategy: AlignmentStrategy,
    /// Number of requests in the batch
    pub requests: usize,
    /// Requests answered from the cache
    pub cache_hits: usize,
    /// Requests where no morpheme matched at all
    pub degenerate: usize,
    /// Morphemes that ended up without a morph, summed over the batch
    pub dropped_morphemes: usize,
    /// Wall-clock processing time
    pub processing_time: Duration,
}

/// Main alignment processor
///
/// Runs single alignments or whole batches with the configured strategy,
/// memoizing results per unique (word, morphemes) pair.
#[derive(Debug)]
pub struct AlignmentProcessor {
    config: EngineConfig,
    sequential: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel: Option<ParallelExecutor>,
    cache: Option<AlignmentCache>,
}

impl AlignmentProcessor {
    /// Create a processor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let parallel = match config.execution_mode {
            ExecutionMode::Sequential => None,
            _ => Some(ParallelExecutor::new(config.threads)?),
        };

        let cache =
            (config.cache_capacity > 0).then(|| AlignmentCache::new(config.cache_capacity));

        Ok(Self {
            config,
            sequential: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel,
            cache,
        })
    }

    /// Create a builder
    pub fn builder() -> AlignmentProcessorBuilder {
        AlignmentProcessorBuilder::new()
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cache counters, if caching is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(AlignmentCache::stats)
    }

    fn aligner(&self) -> &'static dyn Aligner {
        self.config.strategy.aligner()
    }

    /// Align one word against its morphemes
    pub fn align<S: AsRef<str>>(&self, word: &str, morphemes: &[S]) -> Result<Alignment> {
        self.align_request(&AlignmentRequest::new(
            word,
            morphemes.iter().map(AsRef::as_ref),
        ))
    }

    /// Align one request, consulting the cache
    pub fn align_request(&self, request: &AlignmentRequest) -> Result<Alignment> {
        Ok(self.align_cached(request)?.0)
    }

    /// Returns the alignment and whether it came from the cache
    fn align_cached(
        &self,
        request: &AlignmentRequest,
    ) -> std::result::Result<(Alignment, bool), morphalign_core::CoreError> {
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(request)) {
            return Ok((cached, true));
        }

        let alignment = self.aligner().align(&request.word, &request.morpheme_refs())?;

        let dropped = alignment.dropped_morphemes(request.morphemes.len());
        if !dropped.is_empty() {
            debug!(
                word = %request.word,
                morphemes = ?request.morphemes,
                aligned = %alignment,
                ?dropped,
                "morphemes dropped"
            );
        }

        if let Some(cache) = &self.cache {
            cache.insert(request.clone(), alignment.clone());
        }

        Ok((alignment, false))
    }

    /// Segment a word into morphs, splitting off hyphens if configured
    pub fn segment<S: AsRef<str>>(&self, word: &str, morphemes: &[S]) -> Result<Vec<String>> {
        let alignment = self.align(word, morphemes)?;
        if self.config.split_hyphens {
            Ok(alignment.hyphen_split())
        } else {
            Ok(alignment.into_parts().0)
        }
    }

    /// Align a batch with the configured execution mode
    pub fn align_batch(&self, requests: &[AlignmentRequest]) -> Result<BatchOutput> {
        self.align_batch_with_mode(requests, self.config.execution_mode)
    }

    /// Align a batch with a specific execution mode
    pub fn align_batch_with_mode(
        &self,
        requests: &[AlignmentRequest],
        mode: ExecutionMode,
    ) -> Result<BatchOutput> {
        let start_time = Instant::now();
        let mode = match mode {
            ExecutionMode::Adaptive => auto_select(requests.len(), self.config.parallel_threshold),
            other => other,
        };

        let cache_hits = AtomicUsize::new(0);
        let align = |index: usize, request: &AlignmentRequest| -> Result<Alignment> {
            let (alignment, cached) = self.align_cached(request).map_err(|source| {
                warn!(index, word = %request.word, error = %source, "alignment failed");
                EngineError::Request {
                    index,
                    word: request.word.clone(),
                    source,
                }
            })?;
            if cached {
                cache_hits.fetch_add(1, Ordering::Relaxed);
            }
            Ok(alignment)
        };

        let executor = self.executor(mode);
        let alignments = executor.execute(requests, &align)?;

        let metadata = BatchMetadata {
            mode_used: executor.mode(),
            strategy: self.config.strategy,
            requests: requests.len(),
            cache_hits: cache_hits.load(Ordering::Relaxed),
            degenerate: alignments.iter().filter(|a| a.is_degenerate()).count(),
            dropped_morphemes: alignments
                .iter()
                .zip(requests)
                .map(|(a, r)| a.dropped_morphemes(r.morphemes.len()).len())
                .sum(),
            processing_time: start_time.elapsed(),
        };

        debug!(
            mode = metadata.mode_used.name(),
            requests = metadata.requests,
            cache_hits = metadata.cache_hits,
            degenerate = metadata.degenerate,
            elapsed_ms = metadata.processing_time.as_secs_f64() * 1000.0,
            "batch aligned"
        );

        Ok(BatchOutput {
            alignments,
            metadata,
        })
    }

    fn executor(&self, mode: ExecutionMode) -> &dyn Executor {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel | ExecutionMode::Adaptive => match &self.parallel {
                Some(parallel) => parallel,
                // Processor was configured sequential-only
                None => &self.sequential,
            },
            _ => &self.sequential,
        }
    }
}

/// Builder for AlignmentProcessor
///
/// Provides a fluent interface for configuring the processor.
#[derive(Debug, Default)]
pub struct AlignmentProcessorBuilder {
    config: EngineConfig,
}

impl AlignmentProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the alignment strategy
    pub fn strategy(mut self, strategy: AlignmentStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the parallel threshold
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set the cache capacity (0 disables caching)
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Split trailing hyphens off morphs when segmenting
    pub fn split_hyphens(mut self, split: bool) -> Self {
        self.config.split_hyphens = split;
        self
    }

    /// Use sequential configuration preset
    pub fn sequential(mut self) -> Self {
        self.config = EngineConfig::sequential();
        self
    }

    /// Use fast configuration preset
    pub fn fast(mut self) -> Self {
        self.config = EngineConfig::fast();
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<AlignmentProcessor> {
        AlignmentProcessor::with_config(self.config)
    }
}
