// Modal overlay rendering
//
// Help is the only modal: key bindings plus the active theme and engine.

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.fg);
    let header_style = app.theme.title_style().add_modifier(Modifier::UNDERLINED);
    let divider_style = Style::default().fg(app.theme.border);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Summarize", header_style)),
        kb("Ctrl+S, F5", "Summarize input"),
        kb("Esc", "Cancel pending summary"),
        kb("Ctrl+Y", "Copy result"),
        kb("y", "Copy result (result focused)"),
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("Tab", "Switch input / result"),
        kb("↑/↓, j/k", "Scroll result"),
        kb("PgUp/PgDn", "Scroll result by page"),
        kb("Home/End", "Jump to start/end"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("F1", "Toggle this help"),
        kb("Ctrl+L", "Toggle logs"),
        kb("Ctrl+Q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
            Span::styled("  |  Engine: ", desc_style),
            Span::styled(app.summarizer.engine_name(), key_style),
        ]),
    ]);

    let width = 48;
    let height = 24;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(true))
                .title(" Help ")
                .title_bottom(Line::from(" Press F1 or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
