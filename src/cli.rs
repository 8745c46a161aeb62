use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "balanced 5v5 team maker")]
pub struct Cli {
    /// Player names; one roster file per name is loaded from the data directory
    #[arg(required = true)]
    pub players: Vec<String>,
}
