// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive shell: menu loop, input normalization, result rendering.
//!
//! This is the only layer that touches user text. It upper-cases sequence
//! input before calling the store and passes id tokens through untouched, so
//! the store decides whether `abc` is an invalid argument.
//!
//! ```text
//! ┌─ SEQDB ─────────────────────────┐
//! │ 1: GET                          │
//! │ 2: INSERT                       │
//! │ 3: FIND                         │
//! │ 4: OVERLAP                      │
//! │ Anything else: EXIT             │
//! └─────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use serde_json::json;

use seqdb::{SequenceStore, StoreError};

use super::display::{id_list, Palette};
use super::OutputFormat;

const MENU: [&str; 5] = ["1: GET", "2: INSERT", "3: FIND", "4: OVERLAP", "Anything else: EXIT"];

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Interactive shell over a [`SequenceStore`].
pub struct Shell<R, W, E> {
    store: SequenceStore,
    input: R,
    out: W,
    err: E,
    format: OutputFormat,
    prompt: bool,
    palette: Palette,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    /// A non-prompting, uncolored shell. Use the builder methods to change that.
    pub fn new(store: SequenceStore, input: R, out: W, err: E, format: OutputFormat) -> Self {
        Self {
            store,
            input,
            out,
            err,
            format,
            prompt: false,
            palette: Palette::plain(),
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    /// Run until EOF or an exit choice.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.prompt {
                self.print_menu()?;
            }
            let Some(choice) = self.ask("Input please: ")? else {
                break;
            };
            log::debug!("menu choice {:?}", choice);
            if self.dispatch(&choice)? == Step::Exit {
                break;
            }
        }

        if self.prompt && self.format == OutputFormat::Text {
            writeln!(self.out, "Exit")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Step> {
        match choice {
            "1" => self.get(),
            "2" => self.insert(),
            "3" => self.find(),
            "4" => self.overlap(),
            _ => Ok(Step::Exit),
        }
    }

    fn get(&mut self) -> Result<Step> {
        let Some(token) = self.ask("Input sequence_id: ")? else {
            return Ok(Step::Exit);
        };
        match self.store.get(token.as_str()) {
            Ok(found) => {
                let found = found.map(|s| s.as_str().to_string());
                match self.format {
                    OutputFormat::Text => {
                        let line = match &found {
                            Some(sequence) => self.palette.nucleotides(sequence),
                            None => self.palette.not_found(),
                        };
                        writeln!(self.out, "{}", line)?;
                    }
                    OutputFormat::Json => {
                        writeln!(self.out, "{}", json!({ "id": token, "sequence": found }))?;
                    }
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn insert(&mut self) -> Result<Step> {
        let Some(sequence) = self.ask("Input sequence: ")? else {
            return Ok(Step::Exit);
        };
        match self.store.insert(&sequence.to_ascii_uppercase()) {
            Ok(inserted) => {
                log::debug!("inserted id {} ({})", inserted.id, inserted.status);
                match self.format {
                    OutputFormat::Text => {
                        let status = self.palette.status(inserted.status);
                        writeln!(self.out, "id {} ({})", inserted.id, status)?;
                    }
                    OutputFormat::Json => {
                        writeln!(self.out, "{}", serde_json::to_string(&inserted)?)?;
                    }
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn find(&mut self) -> Result<Step> {
        let Some(sample) = self.ask("Input sample: ")? else {
            return Ok(Step::Exit);
        };
        match self.store.find(&sample.to_ascii_uppercase()) {
            Ok(ids) => {
                let ids: Vec<u64> = ids.into_iter().map(|id| id.get()).collect();
                match self.format {
                    OutputFormat::Text => writeln!(self.out, "{}", id_list(&ids))?,
                    OutputFormat::Json => writeln!(self.out, "{}", json!({ "ids": ids }))?,
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn overlap(&mut self) -> Result<Step> {
        let Some(sample) = self.ask("Input sample: ")? else {
            return Ok(Step::Exit);
        };
        let Some(token) = self.ask("Input sequence_id: ")? else {
            return Ok(Step::Exit);
        };
        match self
            .store
            .overlap_detail(&sample.to_ascii_uppercase(), token.as_str())
        {
            Ok(overlap) => match self.format {
                OutputFormat::Text => writeln!(self.out, "{}", self.palette.overlap(overlap))?,
                OutputFormat::Json => writeln!(
                    self.out,
                    "{}",
                    json!({
                        "overlap": overlap.is_some(),
                        "kind": overlap.map(|o| o.kind),
                        "length": overlap.map(|o| o.length),
                    })
                )?,
            },
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    /// Print a prompt (if prompting) and read one trimmed line. `None` on EOF.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.prompt {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.palette.section_top("SEQDB"))?;
        for item in MENU {
            writeln!(self.out, "{}", self.palette.row(&format!(" {}", item)))?;
        }
        writeln!(self.out, "{}", self.palette.section_bot())
    }

    fn report(&mut self, error: &StoreError) -> io::Result<()> {
        log::warn!("rejected: {}", error);
        match self.format {
            OutputFormat::Text => writeln!(self.err, "{}", self.palette.error(&error.to_string())),
            OutputFormat::Json => writeln!(self.out, "{}", json!({ "error": error.to_string() })),
        }
    }
}

/// Counts from seeding a store with [`preload`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub created: usize,
    pub existing: usize,
    pub rejected: usize,
}

/// Insert one sequence per line from `reader`.
///
/// Blank lines and `>`/`#` header lines are skipped. Lines are upper-cased.
/// Invalid lines are logged and counted, not fatal.
pub fn preload(store: &mut SequenceStore, reader: impl BufRead) -> io::Result<PreloadReport> {
    let mut report = PreloadReport::default();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') || line.starts_with('#') {
            continue;
        }
        match store.insert(&line.to_ascii_uppercase()) {
            Ok(inserted) if inserted.is_created() => report.created += 1,
            Ok(_) => report.existing += 1,
            Err(e) => {
                log::warn!("preload line {}: {}", number + 1, e);
                report.rejected += 1;
            }
        }
    }
    Ok(report)
}
