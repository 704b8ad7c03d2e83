use std::io::Write;

use anyhow::Context;
use salute_core::lookup;

pub fn lookup<W: Write>(out: &mut W) -> anyhow::Result<()> {
    lookup::print(out).context("lookup demo failed")
}
