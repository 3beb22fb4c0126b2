//! Composer - the multi-line input box
//!
//! Wraps `tui_textarea::TextArea`. The text here is the source of the
//! summarizer's input; App pushes it across after every edit.

use crate::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Type or paste text to summarize... (Ctrl+S to summarize, F1 for help)";

pub struct Composer {
    textarea: TextArea<'static>,
}

impl Composer {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_cursor_line_style(Style::default());
        Self { textarea }
    }

    /// Current content with lines joined by '\n'
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Insert text at the cursor (used for bracketed paste)
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.textarea.insert_str(normalized);
    }

    /// Character and word counts for the footer
    pub fn counts(&self) -> (usize, usize) {
        self.textarea.lines().iter().fold((0, 0), |(chars, words), line| {
            (
                chars + line.chars().count(),
                words + line.split_whitespace().count(),
            )
        })
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let (chars, words) = self.counts();

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(focused))
                .title(" Input ")
                .title_bottom(
                    Line::from(format!(" {} chars · {} words ", chars, words)).right_aligned(),
                ),
        );
        self.textarea.set_style(Style::default().fg(theme.fg));
        self.textarea
            .set_placeholder_style(Style::default().fg(theme.muted));

        // Only show a cursor where typing goes
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);

        f.render_widget(&self.textarea, area);
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Interactive for Composer {
    /// Every key that reaches the composer is treated as editing
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.textarea.input(key);
        Handled::Yes
    }
}
