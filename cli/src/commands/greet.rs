use std::io::Write;

use anyhow::Context;
use salute_common::person::Person;
use salute_core::greeter;

pub fn greet<W: Write>(person: &Person, out: &mut W) -> anyhow::Result<()> {
    greeter::greet(person, out).with_context(|| format!("failed to greet as '{}'", person.name))
}
