//! termgraph library crate.
//!
//! Plots a single-variable function as ASCII art: [`plot`] rasterizes the
//! function and overlays the axes, [`printer`] writes the result to a
//! terminal, and [`cli`] wires both to command-line arguments and the
//! config file.

pub mod cli;
pub mod config;
pub mod options;
pub mod plot;
pub mod printer;
