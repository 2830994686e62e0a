use shareview::commands::{self, DigestStatus};
use shareview::error::ViewError;
use shareview::listing::errors::ListingError;

#[path = "common/mod.rs"]
mod common;

const DIGEST: &str = "ba0cb43e4b9639c114a0487d5faa7c70452533963fc8beb37d1b67c09a48a21d";

#[test]
fn renders_listings_in_all_three_formats() {
    let toml_path = common::write_listing_file(
        "render_basic",
        "toml",
        &format!(
            "[files.\"beach.jpg\"]\nsegments = 1536\ndigest = \"{DIGEST}\"\n\n[files.\"note.txt\"]\nsegments = 1\n"
        ),
    );
    let json_path = common::write_listing_file(
        "render_basic",
        "json",
        &format!(
            "{{\"files\": {{\"beach.jpg\": {{\"segments\": 1536, \"digest\": \"{DIGEST}\"}}, \"note.txt\": {{\"segments\": 1}}}}}}"
        ),
    );
    let yaml_path = common::write_listing_file(
        "render_basic",
        "yaml",
        &format!(
            "files:\n  beach.jpg:\n    segments: 1536\n    digest: {DIGEST}\n  note.txt:\n    segments: 1\n"
        ),
    );

    for path in [toml_path, json_path, yaml_path] {
        let args = common::build_args(vec![path.clone()], false);
        let stats = commands::render_listings(&args).expect("render succeeds");

        assert_eq!(stats.files_listed, 2, "in {}", path);
        assert_eq!(stats.total_segments, 1537);
        assert_eq!(stats.total_bytes, 1537 * 1024);
        assert_eq!(stats.file_stats[0].name, "beach.jpg");
        assert!(matches!(
            stats.file_stats[0].digest,
            DigestStatus::Present(_)
        ));
        assert!(matches!(stats.file_stats[1].digest, DigestStatus::Missing));
    }
}

#[test]
fn folder_names_prefix_rendered_files() {
    let path = common::write_listing_file(
        "render_folder",
        "toml",
        "folder = \"music\"\n\n[files.\"song.mp3\"]\nsegments = 2048\n",
    );

    let args = common::build_args(vec![path], false);
    let stats = commands::render_listings(&args).unwrap();

    assert_eq!(stats.file_stats[0].name, "music/song.mp3");
    assert_eq!(stats.file_stats[0].bytes, 2048 * 1024);
}

#[test]
fn multiple_listings_accumulate_into_one_stats_block() {
    let first = common::write_listing_file(
        "render_multi_a",
        "toml",
        "[files.\"a.bin\"]\nsegments = 10\n",
    );
    let second = common::write_listing_file(
        "render_multi_b",
        "toml",
        "[files.\"b.bin\"]\nsegments = 20\n\n[files.\"c.bin\"]\nsegments = 30\n",
    );

    let args = common::build_args(vec![first, second], false);
    let stats = commands::render_listings(&args).unwrap();

    assert_eq!(stats.files_listed, 3);
    assert_eq!(stats.total_segments, 60);
    let names: Vec<&str> = stats.file_stats.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["a.bin", "b.bin", "c.bin"]);
}

#[test]
fn unreadable_listing_is_a_file_error() {
    let args = common::build_args(vec!["out/definitely_missing.toml".to_string()], false);
    let err = commands::render_listings(&args).unwrap_err();

    assert!(matches!(
        err,
        ViewError::Listing(ListingError::FileError(_))
    ));
}

#[test]
fn unknown_extension_is_rejected() {
    let path = common::write_listing_file("render_ext", "ini", "files = {}");
    let args = common::build_args(vec![path], false);
    let err = commands::render_listings(&args).unwrap_err();

    assert!(matches!(
        err,
        ViewError::Listing(ListingError::UnsupportedFormat(_))
    ));
}
