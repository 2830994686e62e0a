use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    #[arg(
        long,
        help = "Reject malformed digests instead of rendering them as zeroed bytes",
        default_value_t = false
    )]
    pub strict: bool,

    #[arg(
        long,
        help = "Print an expanded statistics table after the listing",
        default_value_t = false
    )]
    pub stats: bool,

    #[arg(long, help = "Suppress the summary line", default_value_t = false)]
    pub quiet: bool,
}
