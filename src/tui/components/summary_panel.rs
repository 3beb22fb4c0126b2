//! Summary panel - shows the result slot
//!
//! Only drawn when the summarizer has something to display. Failures use
//! the theme's error colour. The copy hint lives in the bottom border so it
//! appears exactly when there is something to copy.

use crate::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Hint shown alongside a result
pub const COPY_HINT: &str = " y / Ctrl+Y copy ";

/// Scroll state for the result panel
#[derive(Debug, Default)]
pub struct SummaryPanel {
    scroll: u16,
    max_scroll: u16,
    viewport: u16,
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top (new result arrived)
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32);
        self.scroll = next as u16;
    }

    /// Recompute scroll bounds for `text` drawn in `area`
    fn measure(&mut self, text: &str, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.viewport = area.height.saturating_sub(2);
        let lines = wrapped_line_count(text, inner_width);
        self.max_scroll = lines.saturating_sub(self.viewport);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        text: &str,
        is_failure: bool,
        theme: &Theme,
        focused: bool,
    ) {
        self.measure(text, area);

        let (title, style) = if is_failure {
            (" Error ", theme.error_style())
        } else {
            (" Summary ", Style::default().fg(theme.summary))
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused))
            .title(title)
            .title_bottom(Line::from(COPY_HINT).right_aligned());
        if self.max_scroll > 0 {
            block = block.title_bottom(
                Line::from(format!(" {}/{} ", self.scroll, self.max_scroll)).left_aligned(),
            );
        }

        let paragraph = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block);

        f.render_widget(paragraph, area);
    }
}

impl Interactive for SummaryPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let page = self.viewport.max(1) as i32;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll,
            _ => return Handled::No,
        }
        Handled::Yes
    }
}

/// Number of rows `text` needs when wrapped to `width` columns
///
/// Character-level estimate; word wrapping can only add a few rows, which
/// just leaves some slack at the bottom.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let rows: usize = text
        .split('\n')
        .map(|line| UnicodeWidthStr::width(line).div_ceil(width).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}
