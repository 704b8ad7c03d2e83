use std::io::IsTerminal;

use colored::*;
use salute_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prefixes each event with a level symbol. The symbol is only coloured
/// when the writer accepts ANSI escapes.
pub struct SaluteFormatter;

impl<S, N> FormatEvent<S, N> for SaluteFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (symbol, paint) = level_symbol(event.metadata().level());

        if writer.has_ansi_escapes() {
            write!(writer, "{} ", paint(symbol.into()))?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: &Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

/// Maps `-v` occurrences to a filter. With none given, `RUST_LOG` wins.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs the global subscriber. Everything goes to stderr so stdout
/// only ever carries program output. Colour is off unless stderr is a tty.
pub fn init_logging(cfg: &Config) {
    let ansi: bool = std::io::stderr().is_terminal();

    tracing_subscriber::fmt()
        .with_ansi(ansi)
        .event_format(SaluteFormatter)
        .with_env_filter(filter_for(cfg.verbosity))
        .with_writer(std::io::stderr)
        .init();
}
