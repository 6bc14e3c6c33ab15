//! I/O operations for reading and exporting Disk Copy images

/// Export of image blocks to plain files
pub mod export;
/// Reader implementation for Disk Copy 4.2 files
pub mod reader;

pub use export::{export_image, sanitize_name, ExportSummary};
pub use reader::{open_dc42, read_dc42, validate_data_size};
