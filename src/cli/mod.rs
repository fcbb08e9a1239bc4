// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqdb interactive shell.
//!
//! One binary, no subcommands: flags configure the store, then the shell reads
//! menu choices from stdin until EOF or an exit choice. `--preload` seeds the
//! store from a file before the first prompt.

pub mod display;
pub mod shell;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "seqdb",
    about = "Interactive in-memory DNA sequence store",
    version
)]
pub struct Cli {
    /// Smallest front/back overlap length that counts as an overlap
    ///
    /// Containment always counts. The default of 1 admits single-symbol
    /// coincidences, which are frequent with a 4-letter alphabet.
    #[arg(long, env = "SEQDB_MIN_OVERLAP", default_value = "1")]
    pub min_overlap: usize,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// File of sequences to insert before the shell starts
    ///
    /// One sequence per line. Blank lines and lines starting with '>' or '#'
    /// are skipped. Lines are upper-cased before insertion.
    #[arg(long)]
    pub preload: Option<PathBuf>,

    /// Never print the menu or input prompts
    #[arg(long)]
    pub no_prompt: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON object per result
    Json,
}

impl Cli {
    /// Log filter implied by `-v` flags, overridable through `RUST_LOG`.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
