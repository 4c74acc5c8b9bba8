pub mod announce;
pub mod poem;
pub mod reach;

use clap::{ArgAction, Parser, Subcommand};
use dirule_common::{Config, MissingKeyPolicy};

#[derive(Parser)]
#[command(name = "dirule")]
#[command(version, about = "Dependency injection, one layer at a time.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Hide headers and the banner
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Treat loading an unknown poem name as an error instead of an empty poem
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Save and load a poem through different storages
    #[command(alias = "p")]
    Poem,
    /// Deliver one announcement through several speakers
    #[command(alias = "a")]
    Announce,
    /// Compute the joint angles a two-link arm needs to reach a point
    #[command(alias = "r")]
    Reach {
        /// Length of the segment attached to the shoulder
        #[arg(long, default_value_t = 1.0)]
        upper: f64,
        /// Length of the segment carrying the tip
        #[arg(long, default_value_t = 1.0)]
        lower: f64,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            missing_key: if self.strict {
                MissingKeyPolicy::Fail
            } else {
                MissingKeyPolicy::Empty
            },
        }
    }
}
