use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "countrydetail",
    about = "Shows country details and neighbouring countries from the REST Countries API",
    version,
    author
)]
pub struct Args {
    /// Country name to look up, e.g. "Belgium"
    pub country: Option<String>,

    /// Print the view model as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Run the HTTP server instead of a one-off lookup
    #[arg(short, long)]
    pub serve: bool,

    /// Print the country once and exit without prompting
    #[arg(short, long)]
    pub non_interactive: bool,
}

impl Args {
    pub fn is_interactive_mode(&self) -> bool {
        !self.non_interactive && !self.json && !self.serve
    }
}
