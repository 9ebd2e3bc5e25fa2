// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the docsift CLI.
//!
//! OneDark on dark terminals, One Light on light ones. A [`Painter`] decides
//! once whether to emit color at all (`NO_COLOR`, not a TTY) and which theme;
//! a [`Screen`] draws result boxes onto any `Write`, which is what lets the
//! tests look at the output.
//!
//! # Theme detection order
//!
//! 1. `DOCSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::io::{self, Write};

use docsift::KeyOutcome;

/// Columns between the two vertical borders.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// What a piece of text is, which picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Frame,
    Section,
    Link,
    Marker,
    Commit,
    Moved,
    Opened,
    Closed,
    Muted,
}

impl Theme {
    pub fn detect() -> Theme {
        if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
            match theme.to_lowercase().as_str() {
                "light" | "l" => return Theme::Light,
                "dark" | "d" => return Theme::Dark,
                _ => {}
            }
        }

        // "fg;bg": backgrounds 7 and up are light, except 8 (dark gray)
        if let Some(bg) = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }

        #[cfg(target_os = "macos")]
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() && !String::from_utf8_lossy(&output.stdout).contains("Dark")
            {
                return Theme::Light;
            }
        }

        Theme::Dark
    }

    /// OneDark (joshdick/onedark.vim) and One Light (sonph/onehalf).
    fn rgb(self, role: Role) -> (u8, u8, u8) {
        match (self, role) {
            (Theme::Dark, Role::Title) => (102, 217, 239),
            (Theme::Dark, Role::Frame | Role::Muted) => (92, 99, 112),
            (Theme::Dark, Role::Section | Role::Moved) => (86, 182, 194),
            (Theme::Dark, Role::Link | Role::Opened) => (97, 175, 239),
            (Theme::Dark, Role::Marker) => (229, 192, 123),
            (Theme::Dark, Role::Commit) => (152, 195, 121),
            (Theme::Dark, Role::Closed) => (198, 120, 221),
            (Theme::Light, Role::Title) => (1, 112, 158),
            (Theme::Light, Role::Frame | Role::Muted) => (160, 161, 167),
            (Theme::Light, Role::Section | Role::Moved) => (1, 132, 188),
            (Theme::Light, Role::Link | Role::Opened) => (64, 120, 242),
            (Theme::Light, Role::Marker) => (193, 132, 1),
            (Theme::Light, Role::Commit) => (80, 161, 79),
            (Theme::Light, Role::Closed) => (166, 38, 164),
        }
    }
}

/// Turns text into styled text, or leaves it alone when colors are off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    theme: Option<Theme>,
}

impl Painter {
    /// Colors only on a TTY, and never with `NO_COLOR` set.
    pub fn detect() -> Painter {
        if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
            return Painter::plain();
        }
        Painter {
            theme: Some(Theme::detect()),
        }
    }

    pub fn plain() -> Painter {
        Painter { theme: None }
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        match self.theme {
            Some(theme) => {
                let (r, g, b) = theme.rgb(role);
                format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
            }
            None => text.to_string(),
        }
    }

    pub fn bold(&self, role: Role, text: &str) -> String {
        if self.theme.is_some() {
            format!("{}{}", BOLD, self.paint(role, text))
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.theme.is_some() {
            format!("{}{}{}", DIM, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Marker in front of the highlighted result row.
    pub fn cursor_marker(&self, highlighted: bool) -> String {
        if highlighted {
            self.bold(Role::Marker, "▶")
        } else {
            " ".to_string()
        }
    }

    /// What a key press did, colored by kind.
    pub fn outcome(&self, outcome: &KeyOutcome) -> String {
        match outcome {
            KeyOutcome::Opened => self.paint(Role::Opened, "opened"),
            KeyOutcome::Moved(Some(row)) => self.paint(Role::Moved, &format!("cursor → {}", row)),
            KeyOutcome::Moved(None) => self.paint(Role::Muted, "cursor → none"),
            KeyOutcome::Committed(url) => self.bold(Role::Commit, &format!("navigate → {}", url)),
            KeyOutcome::Closed => self.paint(Role::Closed, "closed"),
            KeyOutcome::Ignored => self.paint(Role::Muted, "ignored"),
        }
    }
}

/// Boxed sections drawn onto a writer.
pub struct Screen<W: Write> {
    out: W,
    painter: Painter,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, painter: Painter) -> Self {
        Screen { out, painter }
    }

    pub fn painter(&self) -> Painter {
        self.painter
    }

    /// Centered title between double rules.
    pub fn title(&mut self, text: &str) -> io::Result<()> {
        let label = self.painter.bold(Role::Title, text);
        let pad = BOX_WIDTH.saturating_sub(visible_len(&label));
        let rule = "═".repeat(BOX_WIDTH);
        let left = " ".repeat(pad / 2);
        let right = " ".repeat(pad - pad / 2);
        let p = self.painter;
        writeln!(self.out, "{}", p.paint(Role::Link, &format!("╔{}╗", rule)))?;
        writeln!(
            self.out,
            "{}{}{}{}{}",
            p.paint(Role::Link, "║"),
            left,
            label,
            right,
            p.paint(Role::Link, "║")
        )?;
        writeln!(self.out, "{}", p.paint(Role::Link, &format!("╚{}╝", rule)))
    }

    /// `┌─ LABEL ───┐`
    pub fn section_top(&mut self, label: &str) -> io::Result<()> {
        let label = format!("─ {} ", self.painter.bold(Role::Section, label));
        let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
        let p = self.painter;
        writeln!(
            self.out,
            "{}{}{}",
            p.paint(Role::Frame, "┌"),
            label,
            p.paint(Role::Frame, &format!("{}┐", fill))
        )
    }

    /// `│ content   │`, padded to the box width.
    pub fn row(&mut self, content: &str) -> io::Result<()> {
        let side = self.painter.paint(Role::Frame, "│");
        writeln!(self.out, "{}{}{}", side, pad_right(content, BOX_WIDTH), side)
    }

    /// `└───────────┘`
    pub fn section_bot(&mut self) -> io::Result<()> {
        let line = format!("└{}┘", "─".repeat(BOX_WIDTH));
        writeln!(self.out, "{}", self.painter.paint(Role::Frame, &line))
    }

    /// An unboxed line.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}

/// Width of `s` on screen, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| {
            if c == '\x1b' {
                in_escape = true;
            } else if in_escape {
                in_escape = c != 'm';
            } else {
                return true;
            }
            false
        })
        .count()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Cut plain text to `max_chars` characters, ending in an ellipsis when cut.
/// Whitespace runs collapse to single spaces so an excerpt stays on its row.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    match bytes {
        b if b >= KB * KB => format!("{:.1} MB", b as f64 / (KB * KB) as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}
