pub mod render;
pub mod stats;

pub use stats::{DigestStatus, FileStat, ListingStats};

use crate::args::Args;
use crate::error::ViewError;

pub fn render_listings(args: &Args) -> Result<ListingStats, ViewError> {
    let mut stats = ListingStats::new();
    for listing_file in &args.listing.files {
        render::render_listing_single(listing_file, args, &mut stats)?;
    }
    Ok(stats)
}
