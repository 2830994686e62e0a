use std::time::Instant;

use clap::Parser;
use shareview::args::Args;
use shareview::commands;
use shareview::display;

fn main() {
    let args = Args::parse();
    let started = Instant::now();

    let mut stats = match commands::render_listings(&args) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    stats.total_duration = started.elapsed();

    display::print_listing(&stats);

    if args.display.stats {
        display::print_detailed(&stats);
    }

    if !args.display.quiet {
        display::print_summary(&stats);
    }
}
