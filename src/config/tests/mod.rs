//! Config module tests
//!
//! - Resolution (defaults, merging, validation against a registry)
//! - Command-line override parsing
//! - File loading and atomic saving

#[cfg(test)]
mod loader_tests;
#[cfg(test)]
mod resolver_tests;
