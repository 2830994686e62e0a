pub mod args;

use crate::commands::{DigestStatus, ListingStats};
use crate::digest::encode_digest;
use crate::number::format_number;
use crate::size::format_size;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

pub fn print_listing(stats: &ListingStats) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Size").add_attribute(Attribute::Bold),
            Cell::new("Segments").add_attribute(Attribute::Bold),
            Cell::new("Digest").add_attribute(Attribute::Bold),
        ]);

    for file in &stats.file_stats {
        table.add_row(vec![
            Cell::new(&file.name),
            Cell::new(format_size(file.segments)),
            Cell::new(format_number(file.segments as f64, 0)),
            Cell::new(digest_cell(&file.digest)),
        ]);
    }

    println!("{table}");
}

pub fn print_summary(stats: &ListingStats) {
    println!(
        "✓ Listed {} files ({}) in {}ms",
        stats.files_listed,
        format_size(stats.total_segments),
        stats.total_duration.as_millis()
    );
}

pub fn print_detailed(stats: &ListingStats) {
    let mut summary_table = Table::new();
    summary_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Listing Summary")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    summary_table.add_row(vec!["Files Listed", &format!("{}", stats.files_listed)]);
    summary_table.add_row(vec!["Total Size", &format_size(stats.total_segments)]);
    summary_table.add_row(vec![
        "Total Bytes",
        &format!("{} bytes", format_number(stats.total_bytes as f64, 0)),
    ]);
    summary_table.add_row(vec![
        "Digest Coverage",
        &format!("{:.1}%", stats.digest_coverage()),
    ]);

    println!("{summary_table}");
}

fn digest_cell(digest: &DigestStatus) -> String {
    match digest {
        DigestStatus::Present(bytes) => abbreviate(&encode_digest(bytes)),
        DigestStatus::Invalid => "invalid".to_string(),
        DigestStatus::Missing => "-".to_string(),
    }
}

// Digest cells show a 12-character prefix; full digests are 64 characters
// and would dominate the table.
fn abbreviate(hex: &str) -> String {
    if hex.len() > 12 {
        format!("{}…", &hex[..12])
    } else {
        hex.to_string()
    }
}
