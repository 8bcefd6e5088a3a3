//! Population-level genetic statistics.
//!
//! The estimators here aggregate pairwise [`crate::similarity`] scores into
//! population-wide numbers: [`genetic_diversity`] for a Monte Carlo
//! diversity estimate, [`average_genome_length`] for a sampled mean genome
//! length, and [`similarity_matrix`] for the full pairwise picture.
//!
//! Populations are accessed through the [`GenomeSource`] trait and
//! randomness through [`SampleRng`], so the estimators plug into whatever
//! container and generator the surrounding system already has. A
//! `Vec<Genome>` and any [`rand::Rng`] work out of the box.

mod config;
mod estimator;
mod types;

pub use config::DiversityConfig;
pub use estimator::{average_genome_length, genetic_diversity, similarity_matrix};
pub use types::{GenomeSource, SampleRng};
