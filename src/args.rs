use crate::display::args::DisplayArgs;
use crate::listing::args::ListingArgs;
use clap::Parser;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render shared-folder listings with human-readable sizes and digests"
)]
pub struct Args {
    #[command(flatten)]
    pub listing: ListingArgs,

    #[command(flatten)]
    pub display: DisplayArgs,
}
