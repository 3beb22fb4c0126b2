// Views module - frame-level rendering
//
// precis has a single screen:
//   title
//   input | result      (side by side on wide terminals, stacked otherwise)
//   trigger
//   logs                (optional)
//   status
// with the help modal and toast drawn on top.

mod modal;

use super::app::{App, Focus};
use super::layout::Breakpoint;
use crate::tui::components::{logs_panel, status_bar, title_bar, trigger};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel when visible
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    f.render_widget(Block::default().style(app.theme.base_style()), f.area());

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    render_body(f, chunks[1], app);
    if app.show_logs {
        logs_panel::render(f, chunks[2], app);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    if let Some(modal_state) = app.modal {
        modal::render(f, &modal_state, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// Input, trigger and (when there is something to show) the result panel
fn render_body(f: &mut Frame, area: Rect, app: &mut App) {
    let display = app.summarizer.display_text();

    let (input_area, result_area) = match display {
        None => (area, None),
        Some(_) => {
            let direction = if Breakpoint::from_width(area.width).side_by_side() {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let split = Layout::default()
                .direction(direction)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(area);
            (split[0], Some(split[1]))
        }
    };

    let input_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(input_area);

    app.composer
        .render(f, input_chunks[0], &app.theme, app.focus == Focus::Input);
    trigger::render(
        f,
        input_chunks[1],
        app.summarizer.trigger_label(),
        app.summarizer.can_request(),
        &app.theme,
    );

    if let (Some(text), Some(result_area)) = (display, result_area) {
        let is_failure = app.summarizer.outcome().is_failure();
        app.summary_panel.render(
            f,
            result_area,
            &text,
            is_failure,
            &app.theme,
            app.focus == Focus::Result,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::SummaryRecord;
    use crate::logging::LogBuffer;
    use crate::summarizer::testing::{RecordingClipboard, ScriptedEngine};
    use crate::summarizer::{LifecycleEvent, Resolution, Summarizer};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn new_app() -> App {
        let summarizer = Summarizer::new(ScriptedEngine::new([]), RecordingClipboard::new());
        App::new(summarizer, LogBuffer::new(), &Config::default())
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_result_panel_hidden_until_content() {
        let mut app = new_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Input"));
        assert!(text.contains("[ Summarize ]"));
        assert!(!text.contains("Summary"));
        assert!(!text.contains("copy"));
    }

    #[tokio::test]
    async fn test_result_panel_shows_summary_and_copy_hint() {
        let mut app = new_app();
        app.composer.insert_str("text");
        app.summarize();
        app.apply_lifecycle_event(LifecycleEvent::Resolved {
            request_id: 1,
            resolution: Resolution::Summarized(vec![SummaryRecord::new("the gist")]),
        });

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Summary"));
        assert!(text.contains("the gist"));
        assert!(text.contains("Ctrl+Y copy"));
    }

    #[test]
    fn test_help_modal_renders_on_top() {
        let mut app = new_app();
        app.open_help();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("Help"));
    }
}
