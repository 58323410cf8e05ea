//! Integration test entry point for release-gate
//!
//! Tests run the built binary against real temporary git repositories.

mod test_detect;
mod test_init;
