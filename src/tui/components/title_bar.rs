// Title bar component
//
// App name, a spinner while a summary is pending, help hint on the right.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = if app.summarizer.is_pending() {
        format!(" precis  {} summarizing…", app.spinner_char())
    } else {
        " precis".to_string()
    };

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(false))
                .title_top(Line::from(" F1 help ").right_aligned()),
        );

    f.render_widget(title, area);
}
