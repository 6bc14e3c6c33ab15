//! Disk Copy 4.2 image data structures

/// Image header
pub mod header;
/// MFS tag records
pub mod tag;

pub use header::{Header, ImageName};
pub use tag::{mac_timestamp, MfsTag, MfsTags};

use crate::checksum::{ChecksumCheck, ChecksumReport};
use crate::error::Result;
use std::io::Read;
use std::path::Path;

/// A fully read Disk Copy 4.2 image
///
/// The image owns copies of its data and tag blocks; it holds no reference to
/// the source it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskCopyImage {
    /// Validated header
    pub(crate) header: Header,
    /// Data block (`header.data_size()` bytes)
    pub(crate) image_data: Vec<u8>,
    /// Tag block (`header.tag_size()` bytes)
    pub(crate) tag_data: Vec<u8>,
}

impl DiskCopyImage {
    /// Open a Disk Copy image file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::io::reader::open_dc42(path)
    }

    /// Read an image from any byte stream positioned at the header
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        crate::io::reader::read_dc42(reader)
    }

    /// Read an image from an in-memory buffer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        crate::io::reader::read_dc42(bytes)
    }

    /// Get the image header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get the data block
    pub fn image_data(&self) -> &[u8] {
        &self.image_data
    }

    /// Get the tag block
    pub fn tag_data(&self) -> &[u8] {
        &self.tag_data
    }

    /// Check whether the image carries a tag block
    pub fn has_tags(&self) -> bool {
        !self.tag_data.is_empty()
    }

    /// Decode the tag block as consecutive MFS tag records
    pub fn mfs_tags(&self) -> MfsTags<'_> {
        MfsTags::new(&self.tag_data)
    }

    /// Recalculate both block checksums and compare them to the header
    pub fn verify_checksums(&self) -> ChecksumReport {
        ChecksumReport {
            data: ChecksumCheck::new(self.header.data_checksum(), &self.image_data),
            tag: ChecksumCheck::new(self.header.tag_checksum(), &self.tag_data),
        }
    }

    /// Consume the image, returning its header, data block and tag block
    pub fn into_parts(self) -> (Header, Vec<u8>, Vec<u8>) {
        (self.header, self.image_data, self.tag_data)
    }
}
