//! # Person Record
//!
//! A name and an age. Nothing is validated: empty names, zero and
//! negative ages are all accepted and rendered verbatim.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::PersonParseError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The sentence a person greets with.
    pub fn greeting(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hello, my name is {} and I'm {} years old",
            self.name, self.age
        )
    }
}

impl FromStr for Person {
    type Err = PersonParseError;

    /// Parses `NAME:AGE`.
    ///
    /// Splits on the last `:` so names may contain colons. The name may be
    /// empty (`":0"`) and the age may be negative (`"Bob:-5"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!(input = s, "parsing person");

        let Some((name, age_str)) = s.rsplit_once(':') else {
            return Err(PersonParseError::MissingSeparator(s.to_string()));
        };

        let age = age_str
            .trim()
            .parse::<i64>()
            .map_err(|source| PersonParseError::InvalidAge {
                input: age_str.to_string(),
                source,
            })?;

        Ok(Person::new(name, age))
    }
}
