//! Disk encodings, disk formats and layout constants

/// Layout constants
pub mod constants;

pub use constants::*;

use std::fmt;

/// Physical disk encoding recorded in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskEncoding {
    /// GCR 400K (single-sided Macintosh)
    Gcr400k,
    /// GCR 800K (double-sided Macintosh)
    Gcr800k,
    /// MFM 720K
    Mfm720k,
    /// MFM 1.44MB
    Mfm1440k,
    /// MFM 1.68MB (DMF)
    Mfm1680k,
    /// Lisa Twiggy
    Twiggy,
    /// Non-standard encoding
    NonStandard,
}

impl DiskEncoding {
    /// Every defined encoding, in header byte order
    pub const ALL: [DiskEncoding; 7] = [
        DiskEncoding::Gcr400k,
        DiskEncoding::Gcr800k,
        DiskEncoding::Mfm720k,
        DiskEncoding::Mfm1440k,
        DiskEncoding::Mfm1680k,
        DiskEncoding::Twiggy,
        DiskEncoding::NonStandard,
    ];

    /// Get a human-readable name for this encoding
    pub fn name(&self) -> &'static str {
        match self {
            DiskEncoding::Gcr400k => "GCR 400K",
            DiskEncoding::Gcr800k => "GCR 800K",
            DiskEncoding::Mfm720k => "MFM 720K",
            DiskEncoding::Mfm1440k => "MFM 1.44MB",
            DiskEncoding::Mfm1680k => "MFM 1.68MB",
            DiskEncoding::Twiggy => "Twiggy",
            DiskEncoding::NonStandard => "Non-standard",
        }
    }

    /// Data block size an image with this encoding must declare
    ///
    /// Returns `None` for encodings whose size cannot be derived.
    pub fn expected_data_size(&self) -> Option<u32> {
        match self {
            DiskEncoding::Gcr400k => Some(GCR_400K_DATA_SIZE),
            DiskEncoding::Gcr800k => Some(GCR_800K_DATA_SIZE),
            DiskEncoding::Mfm720k => Some(MFM_720K_DATA_SIZE),
            DiskEncoding::Mfm1440k => Some(MFM_1440K_DATA_SIZE),
            DiskEncoding::Mfm1680k | DiskEncoding::Twiggy | DiskEncoding::NonStandard => None,
        }
    }
}

impl TryFrom<u8> for DiskEncoding {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0x00 => Ok(DiskEncoding::Gcr400k),
            0x01 => Ok(DiskEncoding::Gcr800k),
            0x02 => Ok(DiskEncoding::Mfm720k),
            0x03 => Ok(DiskEncoding::Mfm1440k),
            0x04 => Ok(DiskEncoding::Mfm1680k),
            0x54 => Ok(DiskEncoding::Twiggy),
            0x5D => Ok(DiskEncoding::NonStandard),
            other => Err(other),
        }
    }
}

impl From<DiskEncoding> for u8 {
    fn from(encoding: DiskEncoding) -> Self {
        match encoding {
            DiskEncoding::Gcr400k => 0x00,
            DiskEncoding::Gcr800k => 0x01,
            DiskEncoding::Mfm720k => 0x02,
            DiskEncoding::Mfm1440k => 0x03,
            DiskEncoding::Mfm1680k => 0x04,
            DiskEncoding::Twiggy => 0x54,
            DiskEncoding::NonStandard => 0x5D,
        }
    }
}

impl fmt::Display for DiskEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Disk format byte recorded in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskFormat {
    /// Mac OS X / unspecified
    MacOsX,
    /// Lisa Twiggy
    Twiggy,
    /// Macintosh 400K
    Mac400k,
    /// Lisa 400K
    Lisa400k,
    /// Macintosh 800K
    Mac800k,
    /// ProDOS 800K
    ProDos800k,
    /// Non-standard format
    NonStandard,
    /// Marked invalid by the imaging tool
    Invalid,
}

impl DiskFormat {
    /// Every defined format, in header byte order
    pub const ALL: [DiskFormat; 8] = [
        DiskFormat::MacOsX,
        DiskFormat::Twiggy,
        DiskFormat::Mac400k,
        DiskFormat::Lisa400k,
        DiskFormat::Mac800k,
        DiskFormat::ProDos800k,
        DiskFormat::NonStandard,
        DiskFormat::Invalid,
    ];

    /// Get a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            DiskFormat::MacOsX => "Mac OS X",
            DiskFormat::Twiggy => "Twiggy",
            DiskFormat::Mac400k => "Mac 400K",
            DiskFormat::Lisa400k => "Lisa 400K",
            DiskFormat::Mac800k => "Mac 800K",
            DiskFormat::ProDos800k => "ProDOS 800K",
            DiskFormat::NonStandard => "Non-standard",
            DiskFormat::Invalid => "Invalid",
        }
    }
}

impl TryFrom<u8> for DiskFormat {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0x00 => Ok(DiskFormat::MacOsX),
            0x01 => Ok(DiskFormat::Twiggy),
            0x02 => Ok(DiskFormat::Mac400k),
            0x12 => Ok(DiskFormat::Lisa400k),
            0x22 => Ok(DiskFormat::Mac800k),
            0x24 => Ok(DiskFormat::ProDos800k),
            0x93 => Ok(DiskFormat::NonStandard),
            0x96 => Ok(DiskFormat::Invalid),
            other => Err(other),
        }
    }
}

impl From<DiskFormat> for u8 {
    fn from(format: DiskFormat) -> Self {
        match format {
            DiskFormat::MacOsX => 0x00,
            DiskFormat::Twiggy => 0x01,
            DiskFormat::Mac400k => 0x02,
            DiskFormat::Lisa400k => 0x12,
            DiskFormat::Mac800k => 0x22,
            DiskFormat::ProDos800k => 0x24,
            DiskFormat::NonStandard => 0x93,
            DiskFormat::Invalid => 0x96,
        }
    }
}

impl fmt::Display for DiskFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
