//! # Greeting Printer
//!
//! Uppercases a message and prints it a fixed number of times, each line
//! prefixed by a 1-based counter:
//!
//! ```text
//! Iteration 1: HELLO, WORLD!
//! Iteration 2: HELLO, WORLD!
//! ```

use std::io::Write;

use salute_common::config::{Config, DEFAULT_COUNT, DEFAULT_MESSAGE};
use salute_common::error::Result;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreetingPrinter {
    message: String,
    count: usize,
}

impl GreetingPrinter {
    pub fn new(message: impl Into<String>, count: usize) -> Self {
        Self {
            message: message.into(),
            count,
        }
    }

    /// Yields `Iteration <n>: <MESSAGE>` for `n` in `1..=count`.
    ///
    /// Uppercasing applies full Unicode case mapping, so one character may
    /// grow into several (`ß` becomes `SS`).
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let upper: String = self.message.to_uppercase();
        (1..=self.count).map(move |n| format!("Iteration {n}: {upper}"))
    }

    pub fn print<W: Write>(&self, out: &mut W) -> Result<()> {
        debug!(count = self.count, "printing greeting");
        for line in self.lines() {
            trace!(line = %line);
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for GreetingPrinter {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE, DEFAULT_COUNT)
    }
}

impl From<&Config> for GreetingPrinter {
    fn from(cfg: &Config) -> Self {
        Self::new(cfg.message.clone(), cfg.count)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
