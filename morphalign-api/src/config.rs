//! High-level configuration API
//!
//! A [`Config`] can be built in code or read from TOML:
//!
//! ```toml
//! strategy = "optimal"
//! execution_mode = "parallel"
//! threads = 4
//! cache_capacity = 0
//! split_hyphens = true
//! ```
//!
//! Missing keys take their default values; unknown keys are rejected.

use crate::error::{ApiError, Result};
use crate::MorphAligner;
use morphalign_engine::{config::defaults, EngineConfig};
#[cfg(feature = "serde")]
use std::path::Path;

/// Alignment algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Exact trellis search
    #[default]
    Optimal,
    /// Single left-to-right pass
    Greedy,
}

impl From<Strategy> for morphalign_core::AlignmentStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Optimal => Self::Optimal,
            Strategy::Greedy => Self::Greedy,
        }
    }
}

/// How batches are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// One thread
    Sequential,
    /// Thread pool
    Parallel,
    /// Parallel for batches above the threshold
    #[default]
    Adaptive,
}

impl From<ExecutionMode> for morphalign_engine::ExecutionMode {
    fn from(mode: ExecutionMode) -> Self {
        match mode {
            ExecutionMode::Sequential => Self::Sequential,
            ExecutionMode::Parallel => Self::Parallel,
            ExecutionMode::Adaptive => Self::Adaptive,
        }
    }
}

/// High-level configuration for morpheme alignment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// Alignment algorithm
    pub strategy: Strategy,
    /// Batch execution mode
    pub execution_mode: ExecutionMode,
    /// Worker threads (None = one per CPU)
    pub threads: Option<usize>,
    /// Batch size from which adaptive mode goes parallel
    pub parallel_threshold: usize,
    /// Maximum number of memoized alignments (0 disables the cache)
    pub cache_capacity: usize,
    /// Split trailing hyphens into their own unit when segmenting
    pub split_hyphens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            execution_mode: ExecutionMode::default(),
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            cache_capacity: defaults::CACHE_CAPACITY,
            split_hyphens: false,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Single-threaded configuration without a cache
    pub fn sequential() -> Self {
        Self::from_engine(&EngineConfig::sequential())
    }

    /// Configuration for large corpora
    pub fn fast() -> Self {
        Self::from_engine(&EngineConfig::fast())
    }

    fn from_engine(engine: &EngineConfig) -> Self {
        Self {
            strategy: match engine.strategy {
                morphalign_core::AlignmentStrategy::Optimal => Strategy::Optimal,
                morphalign_core::AlignmentStrategy::Greedy => Strategy::Greedy,
            },
            execution_mode: match engine.execution_mode {
                morphalign_engine::ExecutionMode::Sequential => ExecutionMode::Sequential,
                morphalign_engine::ExecutionMode::Parallel => ExecutionMode::Parallel,
                morphalign_engine::ExecutionMode::Adaptive => ExecutionMode::Adaptive,
            },
            threads: engine.threads,
            parallel_threshold: engine.parallel_threshold,
            cache_capacity: engine.cache_capacity,
            split_hyphens: engine.split_hyphens,
        }
    }

    /// Engine configuration equivalent to this one
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            strategy: self.strategy.into(),
            execution_mode: self.execution_mode.into(),
            threads: self.threads,
            parallel_threshold: self.parallel_threshold,
            cache_capacity: self.cache_capacity,
            split_hyphens: self.split_hyphens,
        }
    }

    /// Check the values without building anything
    pub fn validate(&self) -> Result<()> {
        self.to_engine_config()
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&text)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the alignment algorithm
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the algorithm by name ("optimal", "viterbi" or "greedy")
    pub fn strategy_name(mut self, name: &str) -> Result<Self> {
        self.config.strategy = match morphalign_core::AlignmentStrategy::from_name(name) {
            Some(morphalign_core::AlignmentStrategy::Optimal) => Strategy::Optimal,
            Some(morphalign_core::AlignmentStrategy::Greedy) => Strategy::Greedy,
            None => return Err(ApiError::Config(format!("unknown strategy: {name}"))),
        };
        Ok(self)
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Set the adaptive parallel threshold
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set the cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Split trailing hyphens into their own unit when segmenting
    pub fn split_hyphens(mut self, split: bool) -> Self {
        self.config.split_hyphens = split;
        self
    }

    /// Use sequential configuration
    pub fn sequential(mut self) -> Self {
        self.config = Config::sequential();
        self
    }

    /// Use fast configuration
    pub fn fast(mut self) -> Self {
        self.config = Config::fast();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build an aligner directly
    pub fn build_aligner(self) -> Result<MorphAligner> {
        MorphAligner::with_config(self.build()?)
    }
}
