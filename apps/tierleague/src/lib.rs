//! # tierleague
//!
//! Command line front end for `tierleague-core`.
//!
//! The library half exposes the pieces the binary is built from so they can
//! be exercised directly from integration tests:
//! - `cli` - argument parsing and command implementations
//! - `config` - TOML competition files
//! - `render` - text and JSON tables
//! - `error` - the application error type

pub mod cli;
pub mod config;
pub mod error;
pub mod render;

pub use error::AppError;
