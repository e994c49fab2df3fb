//! CLI module for EDL Chopper
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::logging::{LogFormat, LogLevel};

pub mod args;
pub mod commands;

/// EDL Chopper
///
/// Splits a rendered video into one file per timeline marker, using the
/// marker EDL exported by the editor and lossless ffmpeg stream copies.
#[derive(Parser, Debug)]
#[command(name = "chopper")]
#[command(about = "EDL Chopper - Split a video at its timeline markers without re-encoding")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (RUST_LOG takes precedence when set)
    #[arg(long, env = "CHOPPER_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log output format: pretty, compact or json
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    /// Configuration file (default: ./chopper.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cut the input file into one file per EDL segment
    Chop(args::ChopArgs),
    /// Print the segments described by an EDL without cutting
    List(args::ListArgs),
}
