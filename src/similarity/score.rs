//! Top-level similarity dispatch.

use crate::genome::Gene;

use super::config::{ComparisonMethod, SimilarityConfig};
use super::positional::{hamming_similarity_bits, hamming_similarity_bytes};
use super::sequence::jaro_winkler_similarity;

/// Weight of the similarity estimate in the unequal-length blend.
pub const SIMILARITY_WEIGHT: f32 = 0.8;

/// Weight of the length ratio in the unequal-length blend.
pub const LENGTH_RATIO_WEIGHT: f32 = 0.2;

/// Ratio of the shorter to the longer length, in [0, 1].
fn length_ratio(len1: usize, len2: usize) -> f32 {
    let longer = len1.max(len2);
    if longer == 0 {
        return 0.0;
    }
    len1.min(len2) as f32 / longer as f32
}

/// Scores the similarity of two genomes on [0.0, 1.0].
///
/// Equal-length genomes are dispatched to the comparator selected by
/// `config.method`. Unequal-length genomes always go through the
/// alignment-tolerant sequence estimator, whatever the configured method,
/// since the positional comparators are undefined for them; the estimate is
/// then blended with the length ratio:
///
/// ```text
/// score = estimate * 0.8 + (shorter / longer) * 0.2
/// ```
///
/// The length-ratio term keeps an alignment-tolerant score from rewarding
/// genomes that drift arbitrarily far apart in length.
///
/// Invalid method selectors cannot reach this function: numeric selectors
/// from external configuration are converted up front through
/// [`ComparisonMethod::try_from`], which rejects unknown values.
///
/// Note that [`ComparisonMethod::HammingBytes`] scores identical genomes at
/// its 0.25 ceiling, not 1.0; see
/// [`hamming_similarity_bytes`](super::hamming_similarity_bytes).
///
/// # Examples
///
/// ```
/// use genodiv::genome::{Gene, SinkType, SourceType};
/// use genodiv::similarity::{genome_similarity, SimilarityConfig};
///
/// let gene = |n: u8| Gene::new(SourceType::Sensor, n, SinkType::Neuron, n, 0);
/// let short: Vec<_> = (0..3).map(gene).collect();
/// let long: Vec<_> = (10..16).map(gene).collect();
///
/// // No genes in common, lengths 3 and 6: only the length ratio counts.
/// let score = genome_similarity(&short, &long, &SimilarityConfig::default());
/// assert_eq!(score, 0.1);
/// ```
pub fn genome_similarity(genome1: &[Gene], genome2: &[Gene], config: &SimilarityConfig) -> f32 {
    if genome1.len() != genome2.len() {
        let estimate = jaro_winkler_similarity(genome1, genome2, config.max_genes_compared);
        return SIMILARITY_WEIGHT * estimate
            + LENGTH_RATIO_WEIGHT * length_ratio(genome1.len(), genome2.len());
    }

    match config.method {
        ComparisonMethod::JaroWinkler => {
            jaro_winkler_similarity(genome1, genome2, config.max_genes_compared)
        }
        ComparisonMethod::HammingBits => hamming_similarity_bits(genome1, genome2),
        ComparisonMethod::HammingBytes => hamming_similarity_bytes(genome1, genome2),
    }
}

// ============================================================================
// Tests
// ============================================================================
