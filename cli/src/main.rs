mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use salute_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        verbosity: commands.verbose,
        ..Config::default()
    };

    logging::init_logging(&cfg);

    let mut out = io::stdout().lock();
    commands::run(commands.command, cfg, &mut out)
}
