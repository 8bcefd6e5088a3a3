//! Exact positional comparators over the packed gene encoding.
//!
//! Both comparators require equal-length genomes and compare position by
//! position with no tolerance for shifts; a single inserted gene near the
//! front will misalign everything after it. They operate on the 32-bit
//! encoding from [`Gene::pack`], so their scores are properties of the
//! documented bit layout, not of compiler-chosen struct layout.

use crate::genome::Gene;

/// Bit-level similarity between two equal-length genomes.
///
/// XORs corresponding packed genes and counts differing bits. Two unrelated
/// random genomes differ in about half their bits, so the raw Hamming
/// fraction clusters near 0.5 regardless of actual kinship; the fraction is
/// therefore doubled, remapping "uncorrelated" to 0.0, and clamped so that
/// negatively correlated inputs (more than half the bits differing) also
/// score 0.0 instead of going negative.
///
/// Returns 1.0 only for genomes identical under the packed encoding, and
/// 0.0 for a pair of empty genomes.
///
/// # Panics
///
/// Panics if the genomes differ in length.
///
/// # Examples
///
/// ```
/// use genodiv::genome::{Gene, SinkType, SourceType};
/// use genodiv::similarity::hamming_similarity_bits;
///
/// let gene = Gene::new(SourceType::Sensor, 3, SinkType::Action, 7, 1200);
/// let complement = Gene::unpack(!gene.pack());
///
/// assert_eq!(hamming_similarity_bits(&[gene], &[gene]), 1.0);
/// assert_eq!(hamming_similarity_bits(&[gene], &[complement]), 0.0);
/// ```
pub fn hamming_similarity_bits(genome1: &[Gene], genome2: &[Gene]) -> f32 {
    assert_eq!(
        genome1.len(),
        genome2.len(),
        "bit comparison requires equal-length genomes"
    );
    if genome1.is_empty() {
        return 0.0;
    }

    let differing_bits: u64 = genome1
        .iter()
        .zip(genome2.iter())
        .map(|(g1, g2)| (g1.pack() ^ g2.pack()).count_ones() as u64)
        .sum();
    let total_bits = (genome1.len() * Gene::PACKED_BITS) as f32;

    1.0 - (2.0 * differing_bits as f32 / total_bits).min(1.0)
}

/// Record-level similarity between two equal-length genomes.
///
/// Counts positions whose packed genes are exactly equal, then divides by
/// the genomes' packed size in *bytes* rather than by the gene count. Each
/// gene packs to four bytes, so the score tops out at 0.25 for identical
/// genomes; this comparator ranks pairs against each other rather than
/// placing them on an absolute scale, and the compressed range is inherited
/// behavior that downstream thresholds depend on.
///
/// Returns 0.0 for a pair of empty genomes.
///
/// # Panics
///
/// Panics if the genomes differ in length.
pub fn hamming_similarity_bytes(genome1: &[Gene], genome2: &[Gene]) -> f32 {
    assert_eq!(
        genome1.len(),
        genome2.len(),
        "byte comparison requires equal-length genomes"
    );
    if genome1.is_empty() {
        return 0.0;
    }

    let equal_records = genome1
        .iter()
        .zip(genome2.iter())
        .filter(|(g1, g2)| g1.pack() == g2.pack())
        .count();
    let total_bytes = genome1.len() * Gene::PACKED_BYTES;

    equal_records as f32 / total_bytes as f32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{SinkType, SourceType};
    use proptest::prelude::*;

    fn gene(tag: u8) -> Gene {
        Gene::new(SourceType::Sensor, tag, SinkType::Neuron, tag, tag as i16)
    }

    fn genome(tags: &[u8]) -> Vec<Gene> {
        tags.iter().copied().map(gene).collect()
    }

    fn gene_strategy() -> impl Strategy<Value = Gene> {
        any::<u32>().prop_map(Gene::unpack)
    }

    // ---- Bit comparator ----

    #[test]
    fn test_bits_identical_genomes_score_one() {
        let g = genome(&[1, 2, 3, 4, 5]);
        assert_eq!(hamming_similarity_bits(&g, &g), 1.0);
    }

    #[test]
    fn test_bits_complementary_gene_scores_zero() {
        // All 32 bits differ: 2 * 32/32 clamps to 1, score 0.
        let g1 = vec![gene(9)];
        let g2 = vec![Gene::unpack(!g1[0].pack())];
        assert_eq!(hamming_similarity_bits(&g1, &g2), 0.0);
    }

    #[test]
    fn test_bits_clamps_past_half_disagreement() {
        // 20 of 32 bits differ: 2 * 20/32 = 1.25, clamped to 1, score 0.
        let g1 = vec![gene(3)];
        let g2 = vec![Gene::unpack(g1[0].pack() ^ 0x000f_ffff)];
        assert_eq!(hamming_similarity_bits(&g1, &g2), 0.0);
    }

    #[test]
    fn test_bits_scaling_doubles_differing_fraction() {
        // 8 of 32 bits differ: score 1 - 2 * 8/32 = 0.5.
        let g1 = vec![gene(0)];
        let g2 = vec![Gene::unpack(g1[0].pack() ^ 0x0000_00ff)];
        assert_eq!(hamming_similarity_bits(&g1, &g2), 0.5);

        // 4 of 64 bits differ across two genes: score 1 - 2 * 4/64 = 0.875.
        let g1 = genome(&[1, 2]);
        let mut g2 = g1.clone();
        g2[1] = Gene::unpack(g2[1].pack() ^ 0x0000_000f);
        assert_eq!(hamming_similarity_bits(&g1, &g2), 0.875);
    }

    #[test]
    fn test_bits_empty_genomes_score_zero() {
        assert_eq!(hamming_similarity_bits(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "equal-length genomes")]
    fn test_bits_rejects_unequal_lengths() {
        hamming_similarity_bits(&genome(&[1, 2]), &genome(&[1]));
    }

    // ---- Byte comparator ----

    #[test]
    fn test_bytes_identical_genomes_score_quarter() {
        // 4 equal records over 16 bytes: the metric's ceiling.
        let g = genome(&[1, 2, 3, 4]);
        assert_eq!(hamming_similarity_bytes(&g, &g), 0.25);
    }

    #[test]
    fn test_bytes_one_differing_record_of_four() {
        let g1 = genome(&[1, 2, 3, 4]);
        let mut g2 = g1.clone();
        g2[2] = gene(99);
        assert_eq!(hamming_similarity_bytes(&g1, &g2), 3.0 / 16.0);
    }

    #[test]
    fn test_bytes_denominator_is_storage_units_not_genes() {
        // Two identical genes: 2 equal records over 8 bytes. A per-gene
        // denominator would score this 1.0.
        let g = genome(&[7, 8]);
        assert_eq!(hamming_similarity_bytes(&g, &g), 0.25);
    }

    #[test]
    fn test_bytes_disjoint_genomes_score_zero() {
        let g1 = genome(&[1, 2, 3]);
        let g2 = genome(&[10, 11, 12]);
        assert_eq!(hamming_similarity_bytes(&g1, &g2), 0.0);
    }

    #[test]
    fn test_bytes_compares_packed_words_not_fields() {
        // Indices beyond 7 bits collapse under packing, so these field-wise
        // distinct genes are positionally equal.
        let wide = Gene {
            source_type: SourceType::Sensor,
            source_num: 0xff,
            sink_type: SinkType::Neuron,
            sink_num: 0,
            weight: 5,
        };
        let narrow = Gene::new(SourceType::Sensor, 0x7f, SinkType::Neuron, 0, 5);
        assert_ne!(wide, narrow);
        assert_eq!(hamming_similarity_bytes(&[wide], &[narrow]), 0.25);
    }

    #[test]
    fn test_bytes_empty_genomes_score_zero() {
        assert_eq!(hamming_similarity_bytes(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "equal-length genomes")]
    fn test_bytes_rejects_unequal_lengths() {
        hamming_similarity_bytes(&genome(&[1]), &genome(&[1, 2]));
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_bits_score_is_normalized(
            pairs in prop::collection::vec((gene_strategy(), gene_strategy()), 0..32),
        ) {
            let g1: Vec<Gene> = pairs.iter().map(|(g, _)| *g).collect();
            let g2: Vec<Gene> = pairs.iter().map(|(_, g)| *g).collect();
            let score = hamming_similarity_bits(&g1, &g2);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_bytes_score_never_exceeds_quarter(
            pairs in prop::collection::vec((gene_strategy(), gene_strategy()), 0..32),
        ) {
            let g1: Vec<Gene> = pairs.iter().map(|(g, _)| *g).collect();
            let g2: Vec<Gene> = pairs.iter().map(|(_, g)| *g).collect();
            let score = hamming_similarity_bytes(&g1, &g2);
            prop_assert!((0.0..=0.25).contains(&score));
        }

        #[test]
        fn prop_positional_comparators_are_symmetric(
            pairs in prop::collection::vec((gene_strategy(), gene_strategy()), 0..32),
        ) {
            let g1: Vec<Gene> = pairs.iter().map(|(g, _)| *g).collect();
            let g2: Vec<Gene> = pairs.iter().map(|(_, g)| *g).collect();
            prop_assert_eq!(
                hamming_similarity_bits(&g1, &g2),
                hamming_similarity_bits(&g2, &g1)
            );
            prop_assert_eq!(
                hamming_similarity_bytes(&g1, &g2),
                hamming_similarity_bytes(&g2, &g1)
            );
        }
    }
}
