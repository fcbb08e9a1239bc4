// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the seqdb shell.
//!
//! OneDark for dark terminals, One Light for light ones. Nucleotides get their
//! conventional colors (A green, C blue, G yellow, T red) so a long read is
//! easier to scan. Respects `NO_COLOR` and non-TTY detection for pipelines.
//!
//! Everything here returns `String` rather than printing, so the shell can
//! write to any `io::Write` and tests can compare plain text.
//!
//! # Theme detection order
//!
//! 1. `SEQDB_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use seqdb::{InsertStatus, Overlap};

/// Width between the menu box borders.
pub const MENU_WIDTH: usize = 36;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SEQDB_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stdout (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Styling switch decided once per shell session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            enabled: use_colors(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Apply theme color with optional modifiers
    pub fn themed(&self, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Color each nucleotide of a sequence.
    pub fn nucleotides(&self, sequence: &str) -> String {
        if !self.enabled {
            return sequence.to_string();
        }
        let (a, c, g, t) = (GREEN(), BLUE(), YELLOW(), RED());
        let mut out = String::with_capacity(sequence.len() * 20);
        for b in sequence.chars() {
            let color = match b {
                'A' => a.as_str(),
                'C' => c.as_str(),
                'G' => g.as_str(),
                'T' => t.as_str(),
                _ => "",
            };
            out.push_str(color);
            out.push(b);
        }
        out.push_str(RESET);
        out
    }

    pub fn status(&self, status: InsertStatus) -> String {
        match status {
            InsertStatus::Created => self.themed(GREEN, &[BOLD], "created"),
            InsertStatus::Exists => self.themed(YELLOW, &[], "exists"),
        }
    }

    pub fn not_found(&self) -> String {
        self.themed(GRAY, &[], "not found")
    }

    pub fn error(&self, message: &str) -> String {
        format!("{} {}", self.themed(RED, &[BOLD], "error:"), message)
    }

    pub fn overlap(&self, overlap: Option<Overlap>) -> String {
        match overlap {
            Some(o) => format!(
                "{} {}",
                self.themed(GREEN, &[BOLD], "true"),
                self.themed(GRAY, &[], &format!("({}, {})", o.kind, o.length))
            ),
            None => self.themed(RED, &[], "false"),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // BOX DRAWING
    // ═══════════════════════════════════════════════════════════════════════

    /// Section header: ┌─ LABEL ──────────┐
    pub fn section_top(&self, label: &str) -> String {
        let label_part = format!("─ {} ", self.themed(CYAN, &[BOLD], label));
        let remaining = MENU_WIDTH.saturating_sub(visible_len(&label_part));
        format!(
            "{}┌{}{}{}{}┐{}",
            self.border(),
            self.reset(),
            label_part,
            self.border(),
            "─".repeat(remaining),
            self.reset()
        )
    }

    /// Content line: │ content          │
    pub fn row(&self, content: &str) -> String {
        let pad = MENU_WIDTH.saturating_sub(visible_len(content));
        format!(
            "{}│{}{}{}{}│{}",
            self.border(),
            self.reset(),
            content,
            " ".repeat(pad),
            self.border(),
            self.reset()
        )
    }

    /// Section footer: └──────────────────┘
    pub fn section_bot(&self) -> String {
        format!("{}└{}┘{}", self.border(), "─".repeat(MENU_WIDTH), self.reset())
    }

    fn border(&self) -> String {
        if self.enabled {
            GRAY()
        } else {
            String::new()
        }
    }

    fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Render a list of ids as `[1, 2, 3]`.
pub fn id_list(ids: &[u64]) -> String {
    let items: Vec<String> = ids.iter().map(u64::to_string).collect();
    format!("[{}]", items.join(", "))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
