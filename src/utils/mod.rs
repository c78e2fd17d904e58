//! Utility modules for the extractor CLI.

pub mod plural;

pub use plural::plural_count;
