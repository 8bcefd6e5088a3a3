//! Genome data model: genes, genomes, and the packed gene encoding.
//!
//! The similarity estimators in [`crate::similarity`] and the population
//! statistics in [`crate::diversity`] all operate on the types defined here.
//! A genome is nothing more than an ordered `Vec` of [`Gene`] records; there
//! is no wrapper type, so existing gene collections can be compared without
//! conversion.

mod gene;

pub use gene::{random_genome, Gene, Genome, SinkType, SourceType};
