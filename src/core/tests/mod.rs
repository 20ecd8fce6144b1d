//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Element tree tests (insertion, removal, listener cleanup)
//! - Event reaction tests
//! - Registry tests
//! - Type tests (ElementId, Placement)

#[cfg(test)]
mod events_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod types_tests;
