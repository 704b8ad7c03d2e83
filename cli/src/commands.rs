pub mod greet;
pub mod iterate;
pub mod lookup;

use std::io::Write;

use clap::{ArgAction, Parser, Subcommand};
use salute_common::config::{Config, DEFAULT_COUNT, DEFAULT_MESSAGE};
use salute_common::person::Person;
use tracing::info;

#[derive(Parser)]
#[command(name = "salute")]
#[command(about = "Prints greetings.")]
#[command(version)]
pub struct CommandLine {
    /// Increase logging verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print an uppercased message with an iteration counter
    #[command(alias = "i")]
    Iterate {
        /// Number of iterations
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        /// Message to uppercase
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,
    },
    /// Introduce a person given as NAME:AGE
    #[command(alias = "g")]
    Greet { person: Person },
    /// Look a value up in a map, then count to ten
    #[command(alias = "l")]
    Lookup,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Dispatches a parsed command. Program output goes to `out` only.
///
/// Without a subcommand the greeting printer runs with `cfg` as given.
pub fn run<W: Write>(command: Option<Commands>, mut cfg: Config, out: &mut W) -> anyhow::Result<()> {
    match command {
        None => {
            info!("no subcommand given, iterating");
            iterate::iterate(&cfg, out)
        }
        Some(Commands::Iterate { count, message }) => {
            cfg.count = count;
            cfg.message = message;
            info!("iterating {} times", cfg.count);
            iterate::iterate(&cfg, out)
        }
        Some(Commands::Greet { person }) => {
            info!("greeting as {}", person.name);
            greet::greet(&person, out)
        }
        Some(Commands::Lookup) => {
            info!("running lookup demo");
            lookup::lookup(out)
        }
    }
}
