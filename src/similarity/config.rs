//! Similarity scoring configuration.

/// Selects the comparator used for equal-length genomes.
///
/// Unequal-length genomes always go through the alignment-tolerant sequence
/// estimator regardless of this setting; see
/// [`genome_similarity`](crate::similarity::genome_similarity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonMethod {
    /// Alignment-tolerant scoring over gene records, adapted from
    /// Jaro-Winkler string similarity.
    JaroWinkler = 0,
    /// Bit-level agreement over the packed gene encoding.
    HammingBits = 1,
    /// Record-level agreement over the packed gene encoding.
    HammingBytes = 2,
}

impl Default for ComparisonMethod {
    fn default() -> Self {
        ComparisonMethod::JaroWinkler
    }
}

impl TryFrom<u8> for ComparisonMethod {
    type Error = String;

    /// Maps a numeric selector (as stored in external configuration) onto a
    /// method. Selectors outside 0..=2 are rejected here rather than deep in
    /// a comparison loop.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ComparisonMethod::JaroWinkler),
            1 => Ok(ComparisonMethod::HammingBits),
            2 => Ok(ComparisonMethod::HammingBytes),
            other => Err(format!(
                "unknown comparison method selector: {} (expected 0, 1, or 2)",
                other
            )),
        }
    }
}

impl From<ComparisonMethod> for u8 {
    fn from(method: ComparisonMethod) -> Self {
        method as u8
    }
}

/// Configuration for genome similarity scoring.
///
/// # Examples
///
/// ```
/// use genodiv::similarity::{ComparisonMethod, SimilarityConfig};
///
/// let config = SimilarityConfig::new()
///     .with_method(ComparisonMethod::HammingBits)
///     .with_max_genes_compared(32);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityConfig {
    /// Comparator dispatched to for equal-length genomes.
    pub method: ComparisonMethod,
    /// Upper bound on the genes the sequence estimator considers per genome.
    /// Longer genomes are scored on their leading `max_genes_compared` genes.
    pub max_genes_compared: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            method: ComparisonMethod::JaroWinkler,
            max_genes_compared: 20,
        }
    }
}

impl SimilarityConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comparator for equal-length genomes.
    pub fn with_method(mut self, method: ComparisonMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the sequence estimator's per-genome gene cap.
    pub fn with_max_genes_compared(mut self, max_genes_compared: usize) -> Self {
        self.max_genes_compared = max_genes_compared;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_genes_compared == 0 {
            return Err("max_genes_compared must be at least 1".into());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimilarityConfig::default();
        assert_eq!(config.method, ComparisonMethod::JaroWinkler);
        assert_eq!(config.max_genes_compared, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let config = SimilarityConfig::new()
            .with_method(ComparisonMethod::HammingBytes)
            .with_max_genes_compared(64);
        assert_eq!(config.method, ComparisonMethod::HammingBytes);
        assert_eq!(config.max_genes_compared, 64);
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let config = SimilarityConfig::new().with_max_genes_compared(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_method_from_selector() {
        assert_eq!(
            ComparisonMethod::try_from(0),
            Ok(ComparisonMethod::JaroWinkler)
        );
        assert_eq!(
            ComparisonMethod::try_from(1),
            Ok(ComparisonMethod::HammingBits)
        );
        assert_eq!(
            ComparisonMethod::try_from(2),
            Ok(ComparisonMethod::HammingBytes)
        );
    }

    #[test]
    fn test_method_rejects_unknown_selector() {
        assert!(ComparisonMethod::try_from(3).is_err());
        assert!(ComparisonMethod::try_from(255).is_err());
    }

    #[test]
    fn test_method_selector_round_trip() {
        for method in [
            ComparisonMethod::JaroWinkler,
            ComparisonMethod::HammingBits,
            ComparisonMethod::HammingBytes,
        ] {
            assert_eq!(ComparisonMethod::try_from(u8::from(method)), Ok(method));
        }
    }
}
