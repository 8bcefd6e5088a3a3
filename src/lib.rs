//! Genome similarity metrics and population diversity estimation.
//!
//! Provides normalized similarity scoring between gene-sequence genomes and
//! Monte Carlo statistics over whole populations:
//!
//! - **Genome model**: fixed-format connection-gene records with a
//!   documented 32-bit packed encoding, so positional comparisons are
//!   defined on a specified binary layout rather than on struct memory.
//! - **Sequence similarity**: an adapted Jaro-Winkler metric over gene
//!   records, tolerant of gaps, relocations, and unequal genome lengths.
//! - **Positional comparators**: exact bit-level and record-level Hamming
//!   agreement over the packed encoding for equal-length genomes.
//! - **Dispatch**: a configurable selector among the comparators, with a
//!   length-ratio penalty blended in when genome lengths differ.
//! - **Diversity estimation**: sampled neighbor-pair similarity aggregated
//!   into one population-wide diversity score, plus sampled average genome
//!   length and a full pairwise similarity matrix.
//!
//! # Architecture
//!
//! The crate owns no population container and no simulation state. Callers
//! hand in genome slices, a [`diversity::GenomeSource`] view of their
//! population, and a random source; every function is a synchronous pure
//! computation over those inputs, with cost bounded by explicit caps in the
//! configuration types.
//!
//! # Feature flags
//!
//! - `serde`: serialization derives on the genome and configuration types.
//! - `parallel`: rayon-parallel rows in
//!   [`diversity::similarity_matrix`].
//!
//! # Example
//!
//! ```
//! use genodiv::diversity::{genetic_diversity, DiversityConfig};
//! use genodiv::genome::{random_genome, Genome};
//! use genodiv::similarity::{genome_similarity, SimilarityConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let population: Vec<Genome> = (0..100).map(|_| random_genome(&mut rng, 16)).collect();
//!
//! let pairwise = genome_similarity(
//!     &population[0],
//!     &population[1],
//!     &SimilarityConfig::default(),
//! );
//! assert!((0.0..=1.0).contains(&pairwise));
//!
//! let diversity = genetic_diversity(&population, &mut rng, &DiversityConfig::default());
//! assert!((0.0..=1.0).contains(&diversity));
//! ```

pub mod diversity;
pub mod genome;
pub mod similarity;
