use std::io::Write;

use anyhow::Context;
use salute_common::config::Config;
use salute_core::greeting::GreetingPrinter;

pub fn iterate<W: Write>(cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    GreetingPrinter::from(cfg)
        .print(out)
        .context("greeting printer failed")
}
