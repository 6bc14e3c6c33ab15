//! Disk Copy 4.2 image reader

use crate::error::{DiskCopyError, Result};
use crate::format::constants::HEADER_SIZE;
use crate::image::{DiskCopyImage, Header};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Largest allocation made up front for a block; bigger blocks grow as they are read
const MAX_PREALLOCATION: usize = 4 * 1024 * 1024;

/// Open and read a Disk Copy image file from disk
pub fn open_dc42<P: AsRef<Path>>(path: P) -> Result<DiskCopyImage> {
    let path = path.as_ref();

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DiskCopyError::MissingSource(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_file() {
        return Err(DiskCopyError::UnsupportedSource(path.to_path_buf()));
    }

    let file = File::open(path)?;
    read_dc42(io::BufReader::new(file))
}

/// Read a Disk Copy image from a byte stream positioned at the header
///
/// The header is validated, the data size is checked against the size the
/// encoding requires, then the data and tag blocks are read. Checksums are not
/// verified; see [`DiskCopyImage::verify_checksums`].
pub fn read_dc42<R: Read>(mut reader: R) -> Result<DiskCopyImage> {
    let header_bytes = read_block(&mut reader, HEADER_SIZE)?;
    if header_bytes.len() != HEADER_SIZE {
        return Err(DiskCopyError::TruncatedHeader {
            actual: header_bytes.len(),
        });
    }

    let header = Header::parse(&header_bytes)?;
    validate_data_size(&header)?;

    let data_size = header.data_size() as usize;
    let image_data = read_block(&mut reader, data_size)?;
    if image_data.len() != data_size {
        return Err(DiskCopyError::TruncatedData {
            expected: data_size,
            actual: image_data.len(),
        });
    }

    let tag_size = header.tag_size() as usize;
    let tag_data = read_block(&mut reader, tag_size)?;
    if tag_data.len() != tag_size {
        return Err(DiskCopyError::TruncatedTag {
            expected: tag_size,
            actual: tag_data.len(),
        });
    }

    Ok(DiskCopyImage {
        header,
        image_data,
        tag_data,
    })
}

/// Check the declared data size against the size required by the encoding
pub fn validate_data_size(header: &Header) -> Result<()> {
    let encoding = header.encoding();
    let expected = encoding
        .expected_data_size()
        .ok_or(DiskCopyError::UnsupportedEncoding(encoding))?;

    let actual = header.data_size();
    if actual % 2 != 0 || actual != expected {
        return Err(DiskCopyError::InvalidDataSize {
            encoding,
            expected,
            actual,
        });
    }

    Ok(())
}

/// Read up to `len` bytes, stopping early only at end of stream
fn read_block<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut block = Vec::with_capacity(len.min(MAX_PREALLOCATION));
    reader.by_ref().take(len as u64).read_to_end(&mut block)?;
    Ok(block)
}
