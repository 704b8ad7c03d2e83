use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while turning `NAME:AGE` input into a [`crate::person::Person`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PersonParseError {
    #[error("expected NAME:AGE, got '{0}'")]
    MissingSeparator(String),

    #[error("invalid age '{input}': {source}")]
    InvalidAge {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors raised by the printers.
#[derive(Error, Debug)]
pub enum SaluteError {
    /// The output sink refused a write (closed pipe, full disk, ...).
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("no value stored under key '{0}'")]
    MissingKey(String),
}

pub type Result<T> = std::result::Result<T, SaluteError>;
