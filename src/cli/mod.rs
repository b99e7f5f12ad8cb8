//! CLI infrastructure for the tictactoe-td binary
//!
//! This module provides the command-line interface for training a learner,
//! playing against it and evaluating it against fixed opponents.

pub mod commands;
pub mod config;
pub mod output;
