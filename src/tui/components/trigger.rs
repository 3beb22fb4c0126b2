// Trigger row - the summarize button
//
// Label and enabled state both come from the summarizer, so the button
// reads "Summarizing..." and goes muted while a request is in flight.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, label: &str, enabled: bool, theme: &Theme) {
    let button_style = if enabled {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.muted_style()
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[ {} ]", label), button_style),
        Span::styled("  Ctrl+S", theme.muted_style()),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
