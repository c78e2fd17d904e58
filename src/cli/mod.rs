//! Command-line interface module.

mod args;
pub mod common;
pub mod extract;
pub mod index;
pub mod run;

pub use args::{Cli, Commands};
