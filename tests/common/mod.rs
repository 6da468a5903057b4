//! Shared test utilities for logwizzy integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_journal;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_journal::*;
pub use fixtures::*;
