//! Flat bit view of a grid or byte buffer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered sequence of bits, most-significant bit of each byte first.
///
/// Sequences derived from a [`PixelMatrix`](crate::PixelMatrix) are exactly
/// 64 bits long. Sequences produced from text keep one full byte per
/// character and are never truncated; readers that need a fixed number of
/// bits use [`BitSequence::bit`], which treats missing positions as unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    /// Unpack bytes MSB-first.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bits = bytes
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
            .collect();
        Self { bits }
    }

    /// Number of bits held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the sequence holds no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Bit at `index`; positions past the end read as unset.
    #[must_use]
    pub fn bit(&self, index: usize) -> bool {
        self.get(index).unwrap_or(false)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Pack into bytes MSB-first. A trailing partial byte is zero-filled.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| if bit { acc | (0x80 >> i) } else { acc })
            })
            .collect()
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_msb_first() {
        let bits = BitSequence::from_bytes(&[0x41]);
        assert_eq!(bits.to_string(), "01000001");
        assert_eq!(bits.len(), 8);
    }

    #[test]
    fn reads_past_end_as_unset() {
        let bits = BitSequence::from_bytes(&[0xFF]);
        assert!(bits.bit(7));
        assert!(!bits.bit(8));
        assert_eq!(bits.get(8), None);
    }

    #[test]
    fn packs_partial_byte_with_zero_fill() {
        let bits: BitSequence = [true, false, true].into_iter().collect();
        assert_eq!(bits.to_bytes(), vec![0b1010_0000]);
    }

    #[test]
    fn bytes_survive_unpack_and_pack() {
        let bytes = [0x00, 0xFF, 0x5A, 0x81];
        assert_eq!(BitSequence::from_bytes(&bytes).to_bytes(), bytes.to_vec());
    }
}
