//! Diversity estimation configuration.

use crate::similarity::SimilarityConfig;

/// Configuration for the population diversity estimators.
///
/// The sample caps bound estimator cost independently of population size;
/// on very large populations they trade statistical noise for a fixed
/// amount of work. Test suites can lower them for exhaustive small-scale
/// verification.
///
/// # Examples
///
/// ```
/// use genodiv::diversity::DiversityConfig;
/// use genodiv::similarity::{ComparisonMethod, SimilarityConfig};
///
/// let config = DiversityConfig::new()
///     .with_max_samples(200)
///     .with_similarity(SimilarityConfig::new().with_method(ComparisonMethod::HammingBits));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiversityConfig {
    /// Upper bound on genome pairs sampled per diversity estimate. The
    /// effective count is the smaller of this and the population size.
    pub max_samples: usize,
    /// Number of individuals sampled per average-length estimate,
    /// independent of population size.
    pub length_samples: usize,
    /// Similarity scoring applied to each sampled pair.
    pub similarity: SimilarityConfig,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        DiversityConfig {
            max_samples: 1000,
            length_samples: 100,
            similarity: SimilarityConfig::default(),
        }
    }
}

impl DiversityConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cap on sampled genome pairs.
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Sets the number of samples for average-length estimation.
    pub fn with_length_samples(mut self, length_samples: usize) -> Self {
        self.length_samples = length_samples;
        self
    }

    /// Sets the similarity scoring configuration.
    pub fn with_similarity(mut self, similarity: SimilarityConfig) -> Self {
        self.similarity = similarity;
        self
    }

    /// Validates the configuration, including the embedded similarity
    /// configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_samples == 0 {
            return Err("max_samples must be at least 1".into());
        }
        if self.length_samples == 0 {
            return Err("length_samples must be at least 1".into());
        }
        self.similarity.validate()
    }
}

// ============================================================================
// Tests
// ============================================================================
