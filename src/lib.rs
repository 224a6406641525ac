//! Sheetlift - inline style extraction for React Native
//!
//! Sheetlift moves inline `style={{...}}` literals out of JSX into
//! `StyleSheet.create` registries. Literal properties are hoisted into a
//! named registry entry; computed ones stay at the call site, composed with
//! the entry reference in an array. Comments travel with their properties.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (locate, partition, rewrite)
//! - `mcp`: Model Context Protocol server implementation
//! - `notices`: Expected non-extraction outcomes and their reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod notices;
pub mod utils;
