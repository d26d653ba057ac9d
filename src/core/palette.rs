//! ANSI styling for prefix segments
//!
//! Colors come from [`colored::Color`], but the escape sequence is assembled
//! here so that output does not depend on `colored`'s process-wide
//! terminal detection. Whether a logger paints at all is decided once, when
//! it is built.

use colored::Color;

/// Foreground and/or background color applied to one segment of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    fg: Option<Color>,
    bg: Option<Color>,
}

/// Timestamp segment
pub const TIME_PAINT: Paint = Paint::fg(Color::BrightGreen);

/// Caller `file:line` segment. Always ERROR's red, whatever the record level.
pub const CALLER_PAINT: Paint = Paint::fg(Color::Red);

impl Paint {
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    pub const fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
        }
    }

    /// Append `text` wrapped in this style's escape codes to `out`
    pub fn write_to(&self, out: &mut String, text: &str) {
        let mut codes = Vec::with_capacity(2);
        if let Some(bg) = self.bg {
            codes.push(bg.to_bg_str());
        }
        if let Some(fg) = self.fg {
            codes.push(fg.to_fg_str());
        }
        if codes.is_empty() {
            out.push_str(text);
            return;
        }

        out.push_str("\x1b[");
        out.push_str(&codes.join(";"));
        out.push('m');
        out.push_str(text);
        out.push_str("\x1b[0m");
    }

    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 12);
        self.write_to(&mut out, text);
        out
    }
}
