use std::io::Write;

use salute_common::error::Result;
use salute_common::person::Person;
use tracing::debug;

/// Writes the person's greeting as a single line.
///
/// Any name and age are accepted; only the sink can fail.
pub fn greet<W: Write>(person: &Person, out: &mut W) -> Result<()> {
    debug!(name = %person.name, age = person.age, "greeting");
    writeln!(out, "{}", person.greeting())?;
    out.flush()?;
    Ok(())
}
