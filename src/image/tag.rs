//! MFS per-sector tag records
//!
//! 400K Macintosh disks carry a 12-byte tag alongside every 512-byte sector.
//! The Macintosh File System uses it to record which file owns the sector.

use crate::error::ParseError;
use crate::format::constants::*;
use chrono::{DateTime, TimeDelta, Utc};

/// A single MFS tag record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MfsTag {
    /// File number on disk
    pub file_number: u32,
    /// File flags
    pub flags: u16,
    /// Logical block number within the file
    pub logical_block_number: u16,
    /// Raw modification time (seconds since 1904-01-01 00:00:00 UTC)
    pub modification_seconds: u32,
    /// Modification time
    pub last_modification_date: DateTime<Utc>,
}

impl MfsTag {
    /// Size of a tag record in bytes
    pub const SIZE: usize = MFS_TAG_SIZE;

    /// Parse a tag record from exactly 12 bytes
    pub fn parse(data: &[u8]) -> std::result::Result<Self, ParseError> {
        if data.len() != MFS_TAG_SIZE {
            return Err(ParseError::InvalidLength {
                expected: MFS_TAG_SIZE,
                actual: data.len(),
            });
        }

        let modification_seconds = read_u32_be(data, 8);

        Ok(Self {
            file_number: read_u32_be(data, 0),
            flags: read_u16_be(data, 4),
            logical_block_number: read_u16_be(data, 6),
            modification_seconds,
            last_modification_date: mac_timestamp(modification_seconds),
        })
    }
}

impl TryFrom<&[u8]> for MfsTag {
    type Error = ParseError;

    fn try_from(data: &[u8]) -> std::result::Result<Self, Self::Error> {
        MfsTag::parse(data)
    }
}

/// Convert a classic Mac OS timestamp to a UTC date
///
/// Any u32 value is representable, so no range check is performed.
pub fn mac_timestamp(seconds: u32) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(i64::from(seconds) - MAC_EPOCH_OFFSET)
}

/// Iterator over the consecutive tag records of a tag block
///
/// A trailing partial record is skipped.
#[derive(Debug, Clone)]
pub struct MfsTags<'a> {
    chunks: std::slice::ChunksExact<'a, u8>,
}

impl<'a> MfsTags<'a> {
    pub(crate) fn new(tag_data: &'a [u8]) -> Self {
        Self {
            chunks: tag_data.chunks_exact(MFS_TAG_SIZE),
        }
    }
}

impl Iterator for MfsTags<'_> {
    type Item = MfsTag;

    fn next(&mut self) -> Option<MfsTag> {
        self.chunks.next().and_then(|chunk| MfsTag::parse(chunk).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for MfsTags<'_> {}
