//! Disk Copy 4.2 image header

use crate::error::ParseError;
use crate::format::constants::*;
use crate::format::{DiskEncoding, DiskFormat};
use std::fmt;

/// Image name held inline in its fixed 63-byte field
///
/// Only the first `len` bytes are significant. Bytes outside the ASCII range
/// are stored as `?` so the name is always valid UTF-8.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageName {
    bytes: [u8; IMAGE_NAME_FIELD_SIZE],
    len: u8,
}

impl ImageName {
    /// Build a name from the raw field and its Pascal length prefix
    fn from_field(field: &[u8], len: u8) -> Self {
        let mut bytes = [0u8; IMAGE_NAME_FIELD_SIZE];
        for (dst, &src) in bytes.iter_mut().zip(&field[..len as usize]) {
            *dst = if src.is_ascii() { src } else { b'?' };
        }
        Self { bytes, len }
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        // Every stored byte is ASCII
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Get the significant name bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Length of the name in bytes
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Check if the name is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ImageName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ImageName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ImageName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// The 84-byte header at the start of every Disk Copy 4.2 image
///
/// A `Header` can only be obtained through [`Header::parse`], so every field
/// has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    image_name: ImageName,
    data_size: u32,
    tag_size: u32,
    data_checksum: u32,
    tag_checksum: u32,
    encoding: DiskEncoding,
    format: DiskFormat,
    magic_number: u16,
}

impl Header {
    /// Size of the header in bytes
    pub const SIZE: usize = HEADER_SIZE;

    /// Parse and validate a header
    ///
    /// Checks are applied in layout order and the first failure is returned:
    /// buffer length, name length, encoding, format, then magic number.
    pub fn parse(data: &[u8]) -> std::result::Result<Self, ParseError> {
        if data.len() != HEADER_SIZE {
            return Err(ParseError::InvalidLength {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let name_length = data[HEADER_NAME_LENGTH_OFFSET];
        if name_length as usize > IMAGE_NAME_FIELD_SIZE {
            return Err(ParseError::NameTooLong(name_length));
        }
        let image_name = ImageName::from_field(
            &data[HEADER_NAME_OFFSET..HEADER_NAME_OFFSET + IMAGE_NAME_FIELD_SIZE],
            name_length,
        );

        let data_size = read_u32_be(data, HEADER_DATA_SIZE_OFFSET);
        let tag_size = read_u32_be(data, HEADER_TAG_SIZE_OFFSET);
        let data_checksum = read_u32_be(data, HEADER_DATA_CHECKSUM_OFFSET);
        let tag_checksum = read_u32_be(data, HEADER_TAG_CHECKSUM_OFFSET);

        let encoding = DiskEncoding::try_from(data[HEADER_ENCODING_OFFSET])
            .map_err(ParseError::UnknownEncoding)?;
        let format = DiskFormat::try_from(data[HEADER_FORMAT_OFFSET])
            .map_err(ParseError::UnknownFormat)?;

        let magic_number = read_u16_be(data, HEADER_MAGIC_OFFSET);
        if magic_number != MAGIC_NUMBER {
            return Err(ParseError::BadMagicNumber(magic_number));
        }

        Ok(Self {
            image_name,
            data_size,
            tag_size,
            data_checksum,
            tag_checksum,
            encoding,
            format,
            magic_number,
        })
    }

    /// Length of the image name (the Pascal length prefix)
    pub fn image_name_length(&self) -> u8 {
        self.image_name.len
    }

    /// Image name
    pub fn image_name(&self) -> &ImageName {
        &self.image_name
    }

    /// Declared size of the data block in bytes
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Declared size of the tag block in bytes
    pub fn tag_size(&self) -> u32 {
        self.tag_size
    }

    /// Stored checksum of the data block
    pub fn data_checksum(&self) -> u32 {
        self.data_checksum
    }

    /// Stored checksum of the tag block
    pub fn tag_checksum(&self) -> u32 {
        self.tag_checksum
    }

    /// Disk encoding
    pub fn encoding(&self) -> DiskEncoding {
        self.encoding
    }

    /// Disk format
    pub fn format(&self) -> DiskFormat {
        self.format
    }

    /// Private word, always 0x0100
    pub fn magic_number(&self) -> u16 {
        self.magic_number
    }

    /// Total file size implied by the header
    pub fn total_file_size(&self) -> u64 {
        HEADER_SIZE as u64 + u64::from(self.data_size) + u64::from(self.tag_size)
    }
}

impl TryFrom<&[u8]> for Header {
    type Error = ParseError;

    fn try_from(data: &[u8]) -> std::result::Result<Self, Self::Error> {
        Header::parse(data)
    }
}
