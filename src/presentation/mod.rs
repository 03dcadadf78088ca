//! Presentation layer
//!
//! The command-line front end. It only translates arguments into configs
//! and events into output.

pub mod cli;
