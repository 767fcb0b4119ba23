//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by the builder and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for input that
//!   is accepted verbatim but is probably a mistake

pub mod warning;
