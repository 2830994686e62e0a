use crate::args::Args;
use crate::commands::stats::{DigestStatus, FileStat, ListingStats};
use crate::digest;
use crate::error::ViewError;
use crate::listing;
use crate::size::SEGMENT_BYTES;

pub fn render_listing_single(
    listing_file: &str,
    args: &Args,
    stats: &mut ListingStats,
) -> Result<(), ViewError> {
    let listing = listing::load_listing(listing_file)?;

    for (name, entry) in &listing.files {
        let digest = match &entry.digest {
            Some(hex) if args.display.strict => {
                let buf = digest::decode_digest_strict(hex).map_err(|e| ViewError::InListing {
                    file_name: name.clone(),
                    listing_file: listing_file.to_string(),
                    source: Box::new(ViewError::Digest(e)),
                })?;
                DigestStatus::Present(buf)
            }
            Some(hex) => match digest::decode_digest(hex) {
                Some(buf) => DigestStatus::Present(buf),
                None => DigestStatus::Invalid,
            },
            None => DigestStatus::Missing,
        };

        let display_name = match &listing.folder {
            Some(folder) => format!("{}/{}", folder, name),
            None => name.clone(),
        };

        stats.add_file(FileStat {
            name: display_name,
            segments: entry.segments,
            bytes: entry.segments.saturating_mul(SEGMENT_BYTES),
            digest,
        });
    }

    Ok(())
}
