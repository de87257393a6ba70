// src/render/markup.rs
//! Writer for the Conky text markup.
//!
//! Conky treats `$` as the start of a variable, so any user text must go
//! through [`escape`] before it reaches a [`Markup`].

pub const ACCENT: &str = "${color1}";
pub const HIGHLIGHT: &str = "${color2}";
pub const PLAIN: &str = "${color0}";
pub const RESET: &str = "${color}";
pub const ALIGN_CENTER: &str = "${alignc}";
pub const ALIGN_RIGHT: &str = "${alignr}";
pub const RULE: &str = "${hr}";
pub const BULLET: &str = "•";

#[inline]
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace('$', "\\$")
}

/// Upper-cases and letter-spaces a title the way the widget headings look:
/// `"today's tasks"` becomes `"T O D A Y ' S   T A S K S"`.
#[inline]
#[must_use]
pub fn spaced_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| {
            word.to_uppercase()
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

#[derive(Debug, Default)]
pub struct Markup {
    out: String,
}

impl Markup {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { out: String::new() }
    }

    /// Centered, accent-colored heading.
    #[inline]
    pub fn header(&mut self, title: &str) {
        self.line(&format!("{ACCENT}{ALIGN_CENTER}{}{RESET}", spaced_title(title)));
    }

    #[inline]
    pub fn rule(&mut self) {
        self.line(RULE);
    }

    #[inline]
    pub fn accent_rule(&mut self) {
        self.line(&format!("{ACCENT}{RULE}{RESET}"));
    }

    /// Appends a raw line. Callers escape any user text beforehand.
    #[inline]
    pub fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    #[inline]
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    #[inline]
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
