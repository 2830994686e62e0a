use clap::Args;

#[derive(Args, Debug)]
pub struct ListingArgs {
    #[arg(
        value_name = "FILE",
        num_args = 1..,
        help = "One or more listing files to render (toml/yaml/json)"
    )]
    pub files: Vec<String>,
}
