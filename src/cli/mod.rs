//! CLI module for running toll price predictions.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the predict driver.

// Modules
/// CLI arguments.
pub mod args;

/// Verbosity flag and diagnostic macros.
pub mod logging;

/// Prediction logic.
pub mod predict;
