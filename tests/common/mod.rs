//! Consolidated test utilities for the changelog binary
//!
//! This module provides temporary project roots and output predicates for
//! integration tests that drive the real `changelog` executable.

pub mod assertions;
pub mod project;
