//! # Salute Core
//!
//! The printers. Each one writes plain text lines into any
//! [`std::io::Write`] and never touches global state, so calling one twice
//! yields the same bytes twice.

pub mod greeter;
pub mod greeting;
pub mod lookup;
