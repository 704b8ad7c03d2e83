//! # Lookup Demo
//!
//! Stores a value in a map, prints it back, then counts to ten.

use std::collections::HashMap;
use std::io::Write;

use salute_common::error::{Result, SaluteError};
use tracing::debug;

pub const DEMO_KEY: &str = "hello";
pub const DEMO_VALUE: i32 = 42;
pub const COUNT_TO: i32 = 10;

pub fn demo_map() -> HashMap<String, i32> {
    let mut map: HashMap<String, i32> = HashMap::new();
    map.insert(DEMO_KEY.to_string(), DEMO_VALUE);
    map
}

pub fn lookup(map: &HashMap<String, i32>, key: &str) -> Result<i32> {
    map.get(key)
        .copied()
        .ok_or_else(|| SaluteError::MissingKey(key.to_string()))
}

pub fn print<W: Write>(out: &mut W) -> Result<()> {
    let map = demo_map();
    let value = lookup(&map, DEMO_KEY)?;
    debug!(key = DEMO_KEY, value, "lookup hit");

    writeln!(out, "Value: {value}")?;
    for i in 0..COUNT_TO {
        writeln!(out, "Number: {i}")?;
    }
    out.flush()?;
    Ok(())
}
