//! Disk Copy 4.2 extraction tool

use clap::Parser;
use diskcopy::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Extract the data and tag blocks of a Disk Copy 4.2 image
#[derive(Debug, Parser)]
#[command(name = "dc42", version, about)]
struct Args {
    /// Disk Copy 4.2 image to read
    input: PathBuf,

    /// Output directory (defaults to the input file name without extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the tag block as <name>.tags
    #[arg(long)]
    include_tags: bool,

    /// Recalculate and report the data and tag checksums
    #[arg(long)]
    verify: bool,

    /// Print the image summary without writing any files
    #[arg(long)]
    info_only: bool,

    /// List every decoded MFS tag record
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let image = DiskCopyImage::open(&args.input)?;

    if !args.quiet {
        print_info(&image);
    }

    if args.verify {
        print_checksums(&image.verify_checksums());
    }

    if args.verbose {
        list_tags(&image);
    }

    if args.info_only {
        return Ok(());
    }

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));

    let summary = export_image(&image, &output_dir, args.include_tags)?;

    if !args.quiet {
        let (data_path, data_len) = &summary.data_file;
        println!("Wrote data: {} ({} bytes)", file_name(data_path), data_len);
        if let Some((tag_path, tag_len)) = &summary.tag_file {
            println!("Wrote tags: {} ({} bytes)", file_name(tag_path), tag_len);
        } else if args.include_tags {
            println!("No tag data to write");
        }
        println!("Extraction complete: {}", summary.output_dir.display());
    }

    Ok(())
}

fn print_info(image: &DiskCopyImage) {
    let header = image.header();
    println!("Image name: {}", header.image_name());
    println!("Disk encoding: {}", header.encoding());
    println!("Disk format: {}", header.format());
    println!("Data size: {} bytes", header.data_size());
    println!("Tag size: {} bytes", header.tag_size());
    println!("Data checksum: 0x{:08X}", header.data_checksum());
    println!("Tag checksum: 0x{:08X}", header.tag_checksum());
}

/// Checksum mismatches are reported but are not fatal
fn print_checksums(report: &ChecksumReport) {
    println!("Data checksum verify: {}", report.data);
    println!("Tag checksum verify: {}", report.tag);
}

fn list_tags(image: &DiskCopyImage) {
    if !image.has_tags() {
        println!("No tag data");
        return;
    }

    println!(
        "\n{:<8} {:<8} {:<6} {:<6} {:<20}",
        "Sector", "File", "Flags", "Block", "Modified"
    );
    println!("{}", "-".repeat(52));

    for (sector, tag) in image.mfs_tags().enumerate() {
        println!(
            "{:<8} {:<8} {:<6} {:<6} {:<20}",
            sector,
            tag.file_number,
            format!("{:04X}", tag.flags),
            tag.logical_block_number,
            tag.last_modification_date.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .file_stem()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
