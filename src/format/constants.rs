//! Disk Copy 4.2 layout constants

/// Size of the image header in bytes
pub const HEADER_SIZE: usize = 84;

/// Size of the fixed image name field (excluding the length byte)
pub const IMAGE_NAME_FIELD_SIZE: usize = 63;

/// Required value of the private word at the end of the header
pub const MAGIC_NUMBER: u16 = 0x0100;

/// Offset of the Pascal name length byte
pub const HEADER_NAME_LENGTH_OFFSET: usize = 0x00;

/// Offset of the image name characters
pub const HEADER_NAME_OFFSET: usize = 0x01;

/// Offset of the data block size
pub const HEADER_DATA_SIZE_OFFSET: usize = 0x40;

/// Offset of the tag block size
pub const HEADER_TAG_SIZE_OFFSET: usize = 0x44;

/// Offset of the data block checksum
pub const HEADER_DATA_CHECKSUM_OFFSET: usize = 0x48;

/// Offset of the tag block checksum
pub const HEADER_TAG_CHECKSUM_OFFSET: usize = 0x4C;

/// Offset of the disk encoding byte
pub const HEADER_ENCODING_OFFSET: usize = 0x50;

/// Offset of the format byte
pub const HEADER_FORMAT_OFFSET: usize = 0x51;

/// Offset of the private word (magic number)
pub const HEADER_MAGIC_OFFSET: usize = 0x52;

/// Size of an MFS tag record in bytes
pub const MFS_TAG_SIZE: usize = 12;

/// Data block size of a 400K GCR disk (800 sectors of 512 bytes)
pub const GCR_400K_DATA_SIZE: u32 = 409_600;

/// Data block size of an 800K GCR disk (1600 sectors of 512 bytes)
pub const GCR_800K_DATA_SIZE: u32 = 819_200;

/// Data block size of a 720K MFM disk (1440 sectors of 512 bytes)
pub const MFM_720K_DATA_SIZE: u32 = 737_280;

/// Data block size of a 1.44MB MFM disk (2880 sectors of 512 bytes)
pub const MFM_1440K_DATA_SIZE: u32 = 1_474_560;

/// Seconds between the classic Mac OS epoch (1904-01-01) and the Unix epoch
pub const MAC_EPOCH_OFFSET: i64 = 2_082_844_800;

/// Read a big-endian u16 at the given offset
#[inline]
pub(crate) fn read_u16_be(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

/// Read a big-endian u32 at the given offset
#[inline]
pub(crate) fn read_u32_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
