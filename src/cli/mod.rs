pub mod generate;
pub mod list;

use clap::{ArgAction, Parser};

/// favemoji - Emoji favicon generator
#[derive(Parser, Debug)]
#[command(name = "favemoji")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Show the list of available emojis
    #[arg(short, long)]
    pub list: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}
