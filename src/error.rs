use thiserror::Error;

use crate::digest::errors::DigestError;
use crate::listing::errors::ListingError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Digest(#[from] DigestError),

    #[error("While rendering '{file_name}' from '{listing_file}': {source}")]
    InListing {
        file_name: String,
        listing_file: String,
        #[source]
        source: Box<ViewError>,
    },
}
