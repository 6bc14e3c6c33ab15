use crate::format::DiskEncoding;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Disk Copy operations
pub type Result<T> = std::result::Result<T, DiskCopyError>;

/// Errors raised while decoding a fixed-size structure (header or tag record)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input buffer is not the exact size of the structure
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required size in bytes
        expected: usize,
        /// Size of the supplied buffer
        actual: usize,
    },

    /// Pascal name length byte exceeds the 63-byte name field
    #[error("Image name length {0} exceeds maximum of 63")]
    NameTooLong(u8),

    /// Encoding byte is not a known disk encoding
    #[error("Unknown disk encoding 0x{0:02X}")]
    UnknownEncoding(u8),

    /// Format byte is not a known disk format
    #[error("Unknown disk format 0x{0:02X}")]
    UnknownFormat(u8),

    /// Private word is not 0x0100
    #[error("Bad magic number 0x{0:04X} (expected 0x0100)")]
    BadMagicNumber(u16),
}

/// Errors that can occur when reading or exporting Disk Copy images
#[derive(Debug, Error)]
pub enum DiskCopyError {
    /// I/O error occurred while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source does not exist
    #[error("Source not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// The source exists but cannot be read as a byte stream
    #[error("Unsupported source: {} is not a readable file", .0.display())]
    UnsupportedSource(PathBuf),

    /// Fewer than 84 bytes were available for the header
    #[error("Truncated header: expected 84 bytes, got {actual}")]
    TruncatedHeader {
        /// Bytes actually available
        actual: usize,
    },

    /// Header bytes failed validation
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] ParseError),

    /// Encoding is valid but has no fixed data size
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(DiskEncoding),

    /// Declared data size does not match the encoding
    #[error("Invalid data size {actual} for {encoding} (expected {expected})")]
    InvalidDataSize {
        /// Encoding declared in the header
        encoding: DiskEncoding,
        /// Size required by the encoding
        expected: u32,
        /// Size declared in the header
        actual: u32,
    },

    /// Data block ended early
    #[error("Truncated data block: expected {expected} bytes, got {actual}")]
    TruncatedData {
        /// Declared data size
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// Tag block ended early
    #[error("Truncated tag block: expected {expected} bytes, got {actual}")]
    TruncatedTag {
        /// Declared tag size
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// Export destination could not be used
    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}

impl DiskCopyError {
    /// Create an invalid output error
    pub fn invalid_output<S: Into<String>>(message: S) -> Self {
        DiskCopyError::InvalidOutput(message.into())
    }
}
