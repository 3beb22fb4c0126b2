// Status bar component
//
// Engine, uptime and the key hints that matter right now.

use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals drop the key hints and keep the essentials.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let mut status_text = format!(
        " {} │ ⏱ {}",
        app.summarizer.engine_name(),
        app.uptime()
    );

    if bp.at_least(Breakpoint::Normal) {
        status_text.push_str(" │ ");
        status_text.push_str(&key_hints(app, bp));
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(app.theme.border_style(false)),
        );

    f.render_widget(status, area);
}

fn key_hints(app: &App, bp: Breakpoint) -> String {
    let mut hints = Vec::new();

    if app.summarizer.is_pending() {
        hints.push("Esc cancel");
    } else {
        hints.push("^S summarize");
    }
    if app.result_visible() {
        hints.push(if app.focus == Focus::Result {
            "y copy"
        } else {
            "^Y copy"
        });
        hints.push("Tab focus");
    }
    if bp.at_least(Breakpoint::Wide) {
        hints.push("^L logs");
    }
    hints.push("^Q quit");

    hints.join(" · ")
}
