//! Declarative batch runs: a JSON file naming several generator invocations at once.

pub mod config;
