//! Common test utilities for tfaffected scenario, property and CLI tests.
//!
//! This module provides:
//! - Fixtures: the reference monorepo layouts as `(path, content)` tables
//! - `TestTree`: a fixture written to a temp directory
//! - Helpers to resolve against a fixture and to run the CLI binary

#![allow(dead_code)]

pub mod env;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
