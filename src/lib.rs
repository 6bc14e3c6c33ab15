/*!
# diskcopy

A Rust library for reading Apple Disk Copy 4.2 (DC42) disk image files.

## Features

- Validating decoder for the fixed 84-byte DC42 header
- Image reader that checks the data size against the disk encoding
- Disk Copy block checksum with opt-in verification
- MFS per-sector tag record decoding
- Export of data and tag blocks to plain files

## Quick Start

```rust,no_run
use diskcopy::{checksum, DiskCopyImage};

// Open an existing image
let image = DiskCopyImage::open("System Tools.image")?;

let header = image.header();
println!("{}: {} ({} bytes)", header.image_name(), header.encoding(), header.data_size());

// Checksums are never checked while reading
let report = image.verify_checksums();
println!("Data checksum: {}", report.data);

// The checksum engine can also be used on its own
assert_eq!(checksum::calculate(image.image_data()), report.data.actual);

// Walk the MFS tags of a 400K disk
for tag in image.mfs_tags().take(4) {
    println!("file {} block {}", tag.file_number, tag.logical_block_number);
}
# Ok::<(), diskcopy::DiskCopyError>(())
```

## DC42 Layout

| Offset | Size | Field |
|---|---|---|
| 0x00 | 1 | Image name length |
| 0x01 | 63 | Image name |
| 0x40 | 4 | Data size |
| 0x44 | 4 | Tag size |
| 0x48 | 4 | Data checksum |
| 0x4C | 4 | Tag checksum |
| 0x50 | 1 | Disk encoding |
| 0x51 | 1 | Format byte |
| 0x52 | 2 | Private word (0x0100) |

All multi-byte fields are big-endian. The data block follows the header and
the tag block follows the data block.

## Modules

- `checksum`: Disk Copy block checksum
- `format`: Disk encodings, formats and layout constants
- `image`: Image, header and tag record types
- `io`: Reading images and exporting their blocks
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// Disk Copy block checksum
pub mod checksum;
/// Error types and Result alias
pub mod error;
/// Disk encodings, formats and layout constants
pub mod format;
/// Image, header and tag record types
pub mod image;
/// I/O operations for reading and exporting images
pub mod io;

// Re-export common types
pub use checksum::{ChecksumCheck, ChecksumReport};
pub use error::{DiskCopyError, ParseError, Result};
pub use format::{DiskEncoding, DiskFormat};
pub use image::{DiskCopyImage, Header, ImageName, MfsTag, MfsTags};
pub use io::{export_image, open_dc42, read_dc42, sanitize_name, ExportSummary};
