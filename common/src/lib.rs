//! # Salute Common
//!
//! Types shared by every crate in the workspace.
//!
//! * [`config::Config`]: run-time settings built by the CLI.
//! * [`person::Person`]: the named, aged record that can greet.
//! * [`error`]: error types for parsing and output.

pub mod config;
pub mod error;
pub mod person;
