// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line driver for the chunkmap viewer core.
//!
//! Every subcommand builds a [`chunkmap::Viewer`] from an optional JSON
//! config, applies the requested seed and prints one JSON document.
//!
//! ```text
//! chunkmap classify --seed 0 --x -2 --z 0
//! chunkmap search --seed 0 --x 100 --z -300 --radius 10
//! chunkmap render --seed 0 --width 800 --height 600 --scale 2
//! ```
//!
//! Logging goes to stderr through `tracing`; set `RUST_LOG=debug` to see
//! viewer events.

mod cli;
mod error;

pub use cli::{ClassifyArgs, Cli, Commands, RenderArgs, SearchArgs, run, run_from_env};
pub use error::{CliError, Result};
