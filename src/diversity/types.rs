//! Core trait definitions for diversity estimation.
//!
//! The two traits here, [`GenomeSource`] and [`SampleRng`], define the
//! contract between the estimators and the surrounding system's population
//! container and random source.

use rand::Rng;

use crate::genome::{Gene, Genome};

/// Read-only access to the genomes of a population.
///
/// The estimators never retain a genome beyond a single comparison call and
/// never mutate the population, so implementors only hand out borrowed
/// slices. Liveness, fitness, and any other per-individual state are
/// invisible through this trait; sampling is deliberately agnostic to them.
///
/// # Indexing
///
/// Individuals are numbered `1..=population_size()`, matching simulators
/// that reserve index 0 as a sentinel. Implementations may panic when
/// `genome_at` is called outside that range.
///
/// # Implementing
///
/// A plain `Vec<Genome>` already implements this trait, storing individual
/// `i` at `vec[i - 1]`:
///
/// ```
/// use genodiv::diversity::GenomeSource;
/// use genodiv::genome::Genome;
///
/// let population: Vec<Genome> = vec![Vec::new(); 3];
/// assert_eq!(population.population_size(), 3);
/// assert!(population.genome_at(1).is_empty());
/// ```
pub trait GenomeSource {
    /// Number of individuals in the population.
    fn population_size(&self) -> usize;

    /// Borrows the genome of individual `index`, for `index` in
    /// `1..=population_size()`.
    fn genome_at(&self, index: usize) -> &[Gene];
}

impl GenomeSource for Vec<Genome> {
    fn population_size(&self) -> usize {
        self.len()
    }

    fn genome_at(&self, index: usize) -> &[Gene] {
        &self[index - 1]
    }
}

/// Uniform integer sampling over an inclusive range.
///
/// The estimators draw all their randomness through this trait, which keeps
/// them reproducible under a seeded generator and testable against
/// instrumented sources that record or script the drawn indices.
///
/// Every [`rand::Rng`] implements this trait, so a `StdRng` or `ThreadRng`
/// can be passed directly.
pub trait SampleRng {
    /// Draws a uniform integer from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn random_index(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng> SampleRng for R {
    fn random_index(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

// ============================================================================
// Tests
// ============================================================================
