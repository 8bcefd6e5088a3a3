//! Alignment-tolerant genome similarity, adapted from Jaro-Winkler string
//! similarity.
//!
//! This estimator tolerates gaps, relocations, and genomes of unequal
//! length, which makes it the right comparator when the process generating
//! genomes allows length changes or lets genes drift to different offsets.
//! Genes play the role characters play in the string version, with the
//! exact-equality predicate on [`Gene`] standing in for character equality.
//!
//! # References
//!
//! - Jaro, M. A. (1989): "Advances in record-linkage methodology as applied
//!   to matching the 1985 census of Tampa, Florida"
//! - Winkler, W. E. (1990): "String comparator metrics and enhanced decision
//!   rules in the Fellegi-Sunter model of record linkage"

use crate::genome::Gene;

/// Longest leading run of position-wise equal genes credited by the Winkler
/// prefix bonus.
pub const MAX_PREFIX_GENES: usize = 4;

/// Bonus weight per credited prefix gene.
pub const WINKLER_SCALING: f32 = 0.1;

/// Scores two genomes on [0.0, 1.0] with the adapted Jaro-Winkler metric.
///
/// Both genomes are truncated to their leading `max_genes_compared` genes
/// before scoring; longer tails are never inspected. This trades accuracy on
/// long genomes for a hard bound on cost.
///
/// # Algorithm
///
/// 1. With `sl` and `al` the capped lengths, matches are searched inside a
///    sliding window of half-width `max(sl, al) / 2 - 1` (floored at 0).
/// 2. Each query gene claims the first unclaimed reference gene equal to it
///    inside its window. First match wins; no later gene can steal a claim.
/// 3. Claimed genes are then paired in order, query against reference, with
///    a forward-only cursor; unequal pairs count toward transpositions, and
///    the count is halved per the classic Jaro convention.
/// 4. The base score averages `m/sl`, `m/al`, and `(m - t)/m`.
/// 5. A prefix bonus of `0.1` per leading position-wise equal gene (up to 4,
///    stopping at the first mismatch) is added, scaled by the remaining
///    headroom `1 - base`, and the result is clamped to 1.0.
///
/// Zero capped length on either side, or zero matches, scores 0.0.
///
/// # Role asymmetry
///
/// The two arguments are not interchangeable: the match loop iterates over
/// `query` and searches windows in `reference`, and first-match-wins claiming
/// can resolve repeated genes differently when the roles are swapped. Callers
/// comparing many genomes against one baseline should keep the baseline in
/// the `reference` position throughout.
///
/// # Complexity
///
/// O(c * w) gene comparisons, where `c` is the capped length and `w` the
/// window width; with the default cap of 20 this is at most a few hundred.
///
/// # Examples
///
/// ```
/// use genodiv::genome::{Gene, SinkType, SourceType};
/// use genodiv::similarity::jaro_winkler_similarity;
///
/// let gene = |n| Gene::new(SourceType::Sensor, n, SinkType::Neuron, n, 0);
/// let reference: Vec<_> = (0..6).map(gene).collect();
///
/// assert_eq!(jaro_winkler_similarity(&reference, &reference, 20), 1.0);
/// assert_eq!(jaro_winkler_similarity(&reference, &[], 20), 0.0);
/// ```
pub fn jaro_winkler_similarity(
    reference: &[Gene],
    query: &[Gene],
    max_genes_compared: usize,
) -> f32 {
    let s = &reference[..reference.len().min(max_genes_compared)];
    let a = &query[..query.len().min(max_genes_compared)];
    let sl = s.len();
    let al = a.len();

    if sl == 0 || al == 0 {
        return 0.0;
    }

    let range = (sl.max(al) / 2).saturating_sub(1);

    let mut s_claimed = vec![false; sl];
    let mut a_claimed = vec![false; al];
    let mut matches = 0usize;

    for i in 0..al {
        let window = i.saturating_sub(range)..(i + range + 1).min(sl);
        for j in window {
            if !s_claimed[j] && a[i] == s[j] {
                s_claimed[j] = true;
                a_claimed[i] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Pair the k-th claimed query gene with the k-th claimed reference gene.
    // Both sides carry exactly `matches` claims, so the cursor always finds
    // a partner.
    let mut transpositions = 0usize;
    let mut cursor = 0;
    for i in 0..al {
        if !a_claimed[i] {
            continue;
        }
        if let Some(j) = (cursor..sl).find(|&j| s_claimed[j]) {
            cursor = j + 1;
            if a[i] != s[j] {
                transpositions += 1;
            }
        }
    }
    let transpositions = transpositions / 2;

    let m = matches as f32;
    let base = (m / sl as f32 + m / al as f32 + (m - transpositions as f32) / m) / 3.0;

    let prefix = s
        .iter()
        .zip(a.iter())
        .take(MAX_PREFIX_GENES)
        .take_while(|(x, y)| x == y)
        .count();

    (base + prefix as f32 * WINKLER_SCALING * (1.0 - base)).min(1.0)
}

// ============================================================================
// Tests
// ============================================================================
