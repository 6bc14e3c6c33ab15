//! Disk Copy 4.2 block checksum
//!
//! The checksum walks the block in big-endian 16-bit words. Each word is added
//! to a 32-bit accumulator (wrapping) and the accumulator is then rotated right
//! by one bit. A trailing odd byte is ignored.

use std::fmt;

/// Calculate the Disk Copy checksum of a block
pub fn calculate(data: &[u8]) -> u32 {
    data.chunks_exact(2).fold(0u32, |checksum, pair| {
        let word = u16::from_be_bytes([pair[0], pair[1]]);
        checksum.wrapping_add(u32::from(word)).rotate_right(1)
    })
}

/// Comparison of a stored checksum against a freshly calculated one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumCheck {
    /// Checksum recorded in the header
    pub expected: u32,
    /// Checksum calculated from the block contents
    pub actual: u32,
}

impl ChecksumCheck {
    /// Calculate the checksum of `data` and compare it to `expected`
    pub fn new(expected: u32, data: &[u8]) -> Self {
        Self {
            expected,
            actual: calculate(data),
        }
    }

    /// Check whether the block matches its recorded checksum
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for ChecksumCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "valid (0x{:08X})", self.actual)
        } else {
            write!(
                f,
                "MISMATCH expected 0x{:08X}, got 0x{:08X}",
                self.expected, self.actual
            )
        }
    }
}

/// Checksum results for both blocks of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    /// Data block result
    pub data: ChecksumCheck,
    /// Tag block result
    pub tag: ChecksumCheck,
}

impl ChecksumReport {
    /// Check whether both blocks match
    pub fn is_valid(&self) -> bool {
        self.data.is_valid() && self.tag.is_valid()
    }
}
