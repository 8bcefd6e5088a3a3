//! Connection-gene records and their packed binary encoding.
//!
//! A [`Gene`] encodes one weighted connection in an individual's neural
//! wiring: from a sensor or an internal neuron, to an internal neuron or an
//! action. A [`Genome`] is an ordered sequence of genes; its order matters to
//! the alignment-tolerant similarity estimator and is positional for the
//! Hamming comparators.
//!
//! # Packed encoding
//!
//! The positional comparators operate on a specified 32-bit encoding rather
//! than on whatever layout the compiler picks for the struct. Each gene packs
//! to exactly one `u32` via [`Gene::pack`] / [`Gene::unpack`]:
//!
//! ```text
//! bit  31       source_type  (1 = sensor, 0 = neuron)
//! bits 30..24   source_num   (7-bit index)
//! bit  23       sink_type    (1 = action, 0 = neuron)
//! bits 22..16   sink_num     (7-bit index)
//! bits 15..0    weight       (i16, two's complement)
//! ```
//!
//! Every `u32` value is a valid packed gene, and `unpack(pack(g)) == g` for
//! any gene whose indices fit in 7 bits. `pack` masks oversized indices down
//! to 7 bits rather than failing.

use rand::Rng;

/// Where a connection reads its input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceType {
    /// An internal neuron's output.
    Neuron = 0,
    /// A sensory input.
    Sensor = 1,
}

/// Where a connection writes its output to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkType {
    /// An internal neuron's input.
    Neuron = 0,
    /// An action output.
    Action = 1,
}

/// One weighted connection in a genome.
///
/// Genes are small `Copy` records, immutable once constructed and owned by
/// the genome that contains them.
///
/// # Equality
///
/// The derived equality is exact on every field, including `weight`. There is
/// no tolerance window: two genes whose weights differ by one count are not
/// equal. Callers that want approximate weight matching must quantize weights
/// before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Kind of input this connection reads from.
    pub source_type: SourceType,
    /// Index of the source sensor or neuron. Only the low 7 bits are
    /// significant in the packed encoding.
    pub source_num: u8,
    /// Kind of output this connection drives.
    pub sink_type: SinkType,
    /// Index of the sink neuron or action. Only the low 7 bits are
    /// significant in the packed encoding.
    pub sink_num: u8,
    /// Connection weight as a signed fixed-point count; see
    /// [`weight_as_f32`](Gene::weight_as_f32) for the conventional scaling.
    pub weight: i16,
}

/// Mask for the 7-bit source/sink indices.
const INDEX_MASK: u8 = 0x7f;

/// Divisor that maps the stored `i16` weight onto roughly [-4.0, 4.0).
const WEIGHT_SCALE: f32 = 8192.0;

impl Gene {
    /// Size of one packed gene in bytes.
    pub const PACKED_BYTES: usize = 4;

    /// Size of one packed gene in bits.
    pub const PACKED_BITS: usize = Self::PACKED_BYTES * 8;

    /// Creates a gene, masking `source_num` and `sink_num` to their 7
    /// significant bits.
    pub fn new(
        source_type: SourceType,
        source_num: u8,
        sink_type: SinkType,
        sink_num: u8,
        weight: i16,
    ) -> Self {
        Self {
            source_type,
            source_num: source_num & INDEX_MASK,
            sink_type,
            sink_num: sink_num & INDEX_MASK,
            weight,
        }
    }

    /// Packs this gene into its 32-bit encoding.
    ///
    /// Oversized indices are masked to 7 bits, so packing is total.
    ///
    /// # Examples
    ///
    /// ```
    /// use genodiv::genome::{Gene, SinkType, SourceType};
    ///
    /// let gene = Gene::new(SourceType::Sensor, 5, SinkType::Action, 3, -1);
    /// assert_eq!(gene.pack(), 0x8583_ffff);
    /// ```
    pub fn pack(&self) -> u32 {
        ((self.source_type as u32) << 31)
            | (((self.source_num & INDEX_MASK) as u32) << 24)
            | ((self.sink_type as u32) << 23)
            | (((self.sink_num & INDEX_MASK) as u32) << 16)
            | (self.weight as u16 as u32)
    }

    /// Unpacks a gene from its 32-bit encoding.
    ///
    /// Every `u32` is a valid encoding, so unpacking cannot fail.
    pub fn unpack(word: u32) -> Self {
        Self {
            source_type: if (word >> 31) & 1 == 1 {
                SourceType::Sensor
            } else {
                SourceType::Neuron
            },
            source_num: ((word >> 24) as u8) & INDEX_MASK,
            sink_type: if (word >> 23) & 1 == 1 {
                SinkType::Action
            } else {
                SinkType::Neuron
            },
            sink_num: ((word >> 16) as u8) & INDEX_MASK,
            weight: (word & 0xffff) as u16 as i16,
        }
    }

    /// Returns the weight scaled to a float in roughly [-4.0, 4.0).
    pub fn weight_as_f32(&self) -> f32 {
        self.weight as f32 / WEIGHT_SCALE
    }

    /// Draws a uniformly random gene.
    ///
    /// Each field is drawn independently; indices are masked to 7 bits and
    /// the weight covers the full `i16` range.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            source_type: if rng.random::<bool>() {
                SourceType::Sensor
            } else {
                SourceType::Neuron
            },
            source_num: rng.random::<u8>() & INDEX_MASK,
            sink_type: if rng.random::<bool>() {
                SinkType::Action
            } else {
                SinkType::Neuron
            },
            sink_num: rng.random::<u8>() & INDEX_MASK,
            weight: rng.random::<i16>(),
        }
    }
}

/// An ordered sequence of genes, owned by one individual.
pub type Genome = Vec<Gene>;

/// Draws a genome of `length` uniformly random genes.
pub fn random_genome<R: Rng>(rng: &mut R, length: usize) -> Genome {
    (0..length).map(|_| Gene::random(rng)).collect()
}

// ============================================================================
// Tests
// ============================================================================
