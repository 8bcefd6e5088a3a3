//! Genome similarity metrics.
//!
//! Three comparators cover different tolerance/precision tradeoffs:
//!
//! - [`jaro_winkler_similarity`]: alignment-tolerant, handles unequal
//!   lengths, gaps, and relocated genes; considers at most a configured
//!   number of leading genes.
//! - [`hamming_similarity_bits`]: exact bit-level agreement over the packed
//!   encoding, equal lengths only, rescaled so uncorrelated genomes score
//!   near 0.
//! - [`hamming_similarity_bytes`]: exact record-level agreement over the
//!   packed encoding, equal lengths only, with a compressed 0.25 ceiling.
//!
//! [`genome_similarity`] dispatches among them per a [`SimilarityConfig`]
//! and applies a length-ratio penalty when the genomes differ in length.
//! All scores land in [0.0, 1.0].

mod config;
mod positional;
mod score;
mod sequence;

pub use config::{ComparisonMethod, SimilarityConfig};
pub use positional::{hamming_similarity_bits, hamming_similarity_bytes};
pub use score::{genome_similarity, LENGTH_RATIO_WEIGHT, SIMILARITY_WEIGHT};
pub use sequence::{jaro_winkler_similarity, MAX_PREFIX_GENES, WINKLER_SCALING};
