use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "circ")]
#[command(about = "A small lending registry for the circulation desk.")]
pub struct CommandLine {
    /// Suppress decorative output (repeat for more silence)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Preload the demo catalog and borrowers
    #[arg(long)]
    pub seed: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
