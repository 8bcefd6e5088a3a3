//! Monte Carlo population statistics.

use crate::similarity::{genome_similarity, SimilarityConfig};

use super::config::DiversityConfig;
use super::types::{GenomeSource, SampleRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Estimates population-wide genetic diversity on [0.0, 1.0].
///
/// Draws up to `config.max_samples` pairs (never more than the population
/// size), scores each with [`genome_similarity`], and returns one minus the
/// mean similarity: 0.0 for a population of clones, values near 1.0 when
/// sampled pairs share nothing.
///
/// # Sampling
///
/// Each draw picks `index0` uniformly from `1..=population_size - 1` and
/// compares that individual against its immediate successor `index0 + 1`.
/// The last individual is never drawn as `index0`, and arbitrary pairs are
/// never formed: the right element is always the left's successor. The
/// statistic therefore measures neighbor similarity in index order, which
/// is meaningful when the surrounding system places related individuals at
/// adjacent indices; it is not an unbiased all-pairs estimate.
///
/// Populations smaller than 2 score 0.0 without sampling.
///
/// # Panics
///
/// Panics if `config` fails validation.
///
/// # Examples
///
/// ```
/// use genodiv::diversity::{genetic_diversity, DiversityConfig};
/// use genodiv::genome::{random_genome, Genome};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let population: Vec<Genome> = (0..50).map(|_| random_genome(&mut rng, 12)).collect();
///
/// let diversity = genetic_diversity(&population, &mut rng, &DiversityConfig::default());
/// assert!((0.0..=1.0).contains(&diversity));
/// ```
pub fn genetic_diversity<P, R>(population: &P, rng: &mut R, config: &DiversityConfig) -> f32
where
    P: GenomeSource,
    R: SampleRng,
{
    config.validate().expect("invalid DiversityConfig");

    let size = population.population_size();
    if size < 2 {
        return 0.0;
    }

    let count = config.max_samples.min(size);
    let mut similarity_sum = 0.0f32;
    for _ in 0..count {
        let index0 = rng.random_index(1, size - 1);
        let index1 = index0 + 1;
        similarity_sum += genome_similarity(
            population.genome_at(index0),
            population.genome_at(index1),
            &config.similarity,
        );
    }

    1.0 - similarity_sum / count as f32
}

/// Estimates the mean genome length across the population.
///
/// Draws exactly `config.length_samples` individuals uniformly from
/// `1..=population_size`, with replacement, and averages their genome
/// lengths. An empty population scores 0.0 without sampling.
///
/// # Panics
///
/// Panics if `config` fails validation.
pub fn average_genome_length<P, R>(population: &P, rng: &mut R, config: &DiversityConfig) -> f32
where
    P: GenomeSource,
    R: SampleRng,
{
    config.validate().expect("invalid DiversityConfig");

    let size = population.population_size();
    if size == 0 {
        return 0.0;
    }

    let mut length_sum: u64 = 0;
    for _ in 0..config.length_samples {
        let index = rng.random_index(1, size);
        length_sum += population.genome_at(index).len() as u64;
    }

    length_sum as f32 / config.length_samples as f32
}

/// Computes the full pairwise similarity matrix of a population.
///
/// Entry `[i][j]` (0-based) scores individual `i + 1` as reference against
/// individual `j + 1` as query. Both triangles are computed: the sequence
/// estimator is role-asymmetric, so `[i][j]` and `[j][i]` can differ
/// slightly. Diagonal entries score each individual against itself, which
/// is 1.0 except under [`ComparisonMethod::HammingBytes`] and its 0.25
/// ceiling.
///
/// With the `parallel` feature enabled, rows are computed in parallel.
///
/// # Panics
///
/// Panics if `config` fails validation.
///
/// [`ComparisonMethod::HammingBytes`]: crate::similarity::ComparisonMethod::HammingBytes
///
/// # Examples
///
/// ```
/// use genodiv::diversity::similarity_matrix;
/// use genodiv::genome::{random_genome, Genome};
/// use genodiv::similarity::SimilarityConfig;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let g = random_genome(&mut rng, 6);
/// let population: Vec<Genome> = vec![g.clone(), g];
///
/// let matrix = similarity_matrix(&population, &SimilarityConfig::default());
/// assert_eq!(matrix[0][1], 1.0);
/// ```
pub fn similarity_matrix<P>(population: &P, config: &SimilarityConfig) -> Vec<Vec<f32>>
where
    P: GenomeSource + Sync,
{
    config.validate().expect("invalid SimilarityConfig");

    let size = population.population_size();
    let row = |i: usize| -> Vec<f32> {
        let reference = population.genome_at(i + 1);
        (1..=size)
            .map(|j| genome_similarity(reference, population.genome_at(j), config))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let rows = (0..size).into_par_iter().map(row).collect();
    #[cfg(not(feature = "parallel"))]
    let rows = (0..size).map(row).collect();

    rows
}

// ============================================================================
// Tests
// ============================================================================
