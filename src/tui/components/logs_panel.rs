//! Logs panel component
//!
//! Tail of the in-memory log buffer, newest at the bottom. Toggled with
//! Ctrl+L; never takes focus.

use crate::logging::LogEntry;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry, &app.theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(false))
            .title(format!(" Logs ({}) ", app.log_buffer.len())),
    );

    f.render_widget(list, area);
}

fn format_log_entry(entry: &LogEntry, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S ").to_string(),
            theme.muted_style(),
        ),
        Span::styled(
            format!("{:<5} ", entry.level.as_str()),
            Style::default().fg(theme.log_level_color(entry.level)),
        ),
        Span::styled(entry.message.clone(), Style::default().fg(theme.fg)),
    ])
}
