//! Export of image blocks to plain files
//!
//! The data block is written as `<name>.dsk` and, when requested, the tag block
//! as `<name>.tags`, where `<name>` is the image name made safe for filenames.

use crate::error::{DiskCopyError, Result};
use crate::image::DiskCopyImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension used for the exported data block
pub const DATA_EXTENSION: &str = "dsk";

/// Extension used for the exported tag block
pub const TAG_EXTENSION: &str = "tags";

/// Name used when the image name sanitises to nothing
const FALLBACK_NAME: &str = "untitled";

/// Characters not allowed in filenames on common platforms
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Files written by [`export_image`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Directory the files were written to
    pub output_dir: PathBuf,
    /// Path of the data file and its size in bytes
    pub data_file: (PathBuf, usize),
    /// Path of the tag file and its size in bytes, if one was written
    pub tag_file: Option<(PathBuf, usize)>,
}

/// Make an image name safe to use as a filename
///
/// Path separators, control characters and characters reserved on common
/// platforms are replaced with `_`. Names that would be empty or refer to the
/// current or parent directory become `untitled`.
pub fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_control() || INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = sanitized.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        FALLBACK_NAME.to_string()
    } else {
        sanitized
    }
}

/// Write an image's data block (and optionally its tag block) into `output_dir`
///
/// The directory is created if needed. A tag file is only written when
/// `include_tags` is set and the image has a non-empty tag block. If the tag
/// file cannot be written the data file is removed again.
pub fn export_image<P: AsRef<Path>>(
    image: &DiskCopyImage,
    output_dir: P,
    include_tags: bool,
) -> Result<ExportSummary> {
    let output_dir = output_dir.as_ref();

    if output_dir.exists() && !output_dir.is_dir() {
        return Err(DiskCopyError::invalid_output(format!(
            "{} exists and is not a directory",
            output_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;

    let base_name = sanitize_name(image.header().image_name().as_str());

    let data_path = output_dir.join(format!("{}.{}", base_name, DATA_EXTENSION));
    fs::write(&data_path, image.image_data())?;

    let tag_file = if include_tags && image.has_tags() {
        let tag_path = output_dir.join(format!("{}.{}", base_name, TAG_EXTENSION));
        if let Err(e) = fs::write(&tag_path, image.tag_data()) {
            // Leave no partial export behind
            let _ = fs::remove_file(&data_path);
            return Err(e.into());
        }
        Some((tag_path, image.tag_data().len()))
    } else {
        None
    };

    Ok(ExportSummary {
        output_dir: output_dir.to_path_buf(),
        data_file: (data_path, image.image_data().len()),
        tag_file,
    })
}
