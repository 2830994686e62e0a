#![allow(dead_code)]

use std::fs;

use shareview::args::Args;
use shareview::display::args::DisplayArgs;
use shareview::listing::args::ListingArgs;

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

pub fn write_listing_file(file_stem: &str, ext: &str, contents: &str) -> String {
    ensure_out_dir();
    let path = format!("out/{}.{}", file_stem, ext);
    fs::write(&path, contents).expect("write listing file");
    path
}

pub fn build_args(files: Vec<String>, strict: bool) -> Args {
    Args {
        listing: ListingArgs { files },
        display: DisplayArgs {
            strict,
            stats: false,
            quiet: true,
        },
    }
}
