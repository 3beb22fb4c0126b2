// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (terminal input, redraw ticks, summarizer completions)
// - Key dispatch: modal, then global chords, then the focused component

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::summarizer::{panic_message, Summarizer};
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::thread::ThreadId;
use std::time::Duration;
use traits::{Handled, Interactive};

/// How long one input poll may block the loop
const INPUT_POLL: Duration = Duration::from_millis(10);

/// Run the TUI until the user quits
pub async fn run_tui(summarizer: Summarizer, log_buffer: LogBuffer, config: &Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    install_panic_hook();

    let mut app = App::new(summarizer, log_buffer, config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal even if the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    // Back to the default hook now that stderr is visible again
    let _ = std::panic::take_hook();

    result
}

/// Install a panic hook for the lifetime of the alternate screen
///
/// A panic on the UI thread restores the terminal and then reports as usual.
/// Panics anywhere else (engine and clipboard tasks) go to the log instead of
/// being printed over the TUI.
fn install_panic_hook() {
    let ui_thread = std::thread::current().id();
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        if reports_to_terminal(ui_thread, std::thread::current().id()) {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
            original_hook(panic_info);
        } else {
            let location = panic_info
                .location()
                .map(|l| l.to_string())
                .unwrap_or_default();
            tracing::warn!(
                %location,
                "Background task panicked: {}",
                panic_message(panic_info.payload())
            );
        }
    }));
}

fn reports_to_terminal(ui_thread: ThreadId, current: ThreadId) -> bool {
    ui_thread == current
}

/// Main event loop
///
/// Waits on three sources at once:
/// 1. Terminal input (keys, paste, resize)
/// 2. Redraw ticks (spinner, toast expiry)
/// 3. Summarizer completions (summary resolved, clipboard write finished)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(app.tick_rate);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            maybe_event = poll_terminal() => {
                if let Some(event) = maybe_event {
                    handle_terminal_event(app, event);
                }
            }

            _ = tick_interval.tick() => app.tick(),

            Some(event) = app.summarizer.next_event() => app.apply_lifecycle_event(event),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Read one terminal event if any arrives within `INPUT_POLL`
async fn poll_terminal() -> Option<Event> {
    if event::poll(INPUT_POLL).unwrap_or(false) {
        match event::read() {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!("Failed to read terminal event: {}", e);
                None
            }
        }
    } else {
        None
    }
}

fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Paste(text) => {
            if app.modal.is_none() && app.focus == Focus::Input {
                app.composer.insert_str(&text);
                app.sync_input();
            }
        }
        // Resize just needs the redraw that follows every event
        _ => {}
    }
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Focused component
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        app.handle_key_release(key.code);
        return;
    }

    if let Some(modal) = app.modal.as_mut() {
        if modal.handle_input(key.code) == ModalAction::Close {
            app.modal = None;
        }
        return;
    }

    if handle_global_key(app, &key) {
        return;
    }

    match app.focus {
        Focus::Input => {
            app.composer.handle_key(key);
            app.sync_input();
        }
        Focus::Result => {
            let is_plain_y = key.code == KeyCode::Char('y') && key.modifiers.is_empty();
            if is_plain_y {
                if app.handle_key_press(key.code) {
                    app.copy_summary();
                }
            } else if app.handle_key_press(key.code) {
                if let Handled::No = app.summary_panel.handle_key(key) {
                    tracing::trace!(?key, "Unhandled key in result panel");
                }
            }
        }
    }
}

/// Keys that work regardless of focus
///
/// Returns true if the key was consumed.
fn handle_global_key(app: &mut App, key: &KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action: fn(&mut App) = match (key.code, ctrl) {
        (KeyCode::Char('q'), true) | (KeyCode::Char('c'), true) => |app| app.should_quit = true,
        (KeyCode::Char('s'), true) | (KeyCode::F(5), _) => App::summarize,
        (KeyCode::Char('y'), true) => App::copy_summary,
        (KeyCode::Char('l'), true) => App::toggle_logs,
        (KeyCode::F(1), _) => App::open_help,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => App::toggle_focus,
        (KeyCode::Esc, _) if app.summarizer.is_pending() => |app| {
            app.cancel_summary();
        },
        _ => return false,
    };

    if app.handle_key_press(key.code) {
        action(app);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::testing::{wait_until, GatedEngine, RecordingClipboard, ScriptedEngine, Step};
    use crate::summarizer::LifecycleEvent;
    use crossterm::event::KeyEventState;

    fn new_app(summarizer: Summarizer) -> App {
        App::new(summarizer, LogBuffer::new(), &Config::default())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key_event(app, KeyEvent::new(code, modifiers));
        // Debounce is per physical press; release between test presses
        handle_key_event(
            app,
            KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            },
        );
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    async fn apply_next(app: &mut App) {
        let event: LifecycleEvent = app.summarizer.next_event().await.unwrap();
        app.apply_lifecycle_event(event);
    }

    #[tokio::test]
    async fn test_typing_then_ctrl_s_summarizes() {
        let engine = ScriptedEngine::new([Step::summary("short")]);
        let mut app = new_app(Summarizer::new(engine.clone(), RecordingClipboard::new()));

        type_str(&mut app, "a long text");
        assert_eq!(app.summarizer.input(), "a long text");

        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(app.summarizer.is_pending());
        assert_eq!(app.summarizer.trigger_label(), "Summarizing...");

        apply_next(&mut app).await;
        assert_eq!(app.summarizer.display_text().as_deref(), Some("short"));
        assert_eq!(engine.inputs(), vec!["a long text".to_string()]);
    }

    #[tokio::test]
    async fn test_plain_s_is_typed_not_triggered() {
        let mut app = new_app(Summarizer::new(
            ScriptedEngine::new([]),
            RecordingClipboard::new(),
        ));
        type_str(&mut app, "ss");
        assert!(!app.summarizer.is_pending());
        assert_eq!(app.composer.text(), "ss");
    }

    #[tokio::test]
    async fn test_paste_goes_to_input() {
        let mut app = new_app(Summarizer::new(
            ScriptedEngine::new([]),
            RecordingClipboard::new(),
        ));
        handle_terminal_event(&mut app, Event::Paste("pasted\r\ntext".into()));
        assert_eq!(app.summarizer.input(), "pasted\ntext");
    }

    #[tokio::test]
    async fn test_y_copies_when_result_focused() {
        let clipboard = RecordingClipboard::new();
        let mut app = new_app(Summarizer::new(
            ScriptedEngine::new([Step::summary("gist")]),
            clipboard.clone(),
        ));
        type_str(&mut app, "text");
        press(&mut app, KeyCode::F(5), KeyModifiers::NONE);
        apply_next(&mut app).await;

        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Result);
        press(&mut app, KeyCode::Char('y'), KeyModifiers::NONE);
        apply_next(&mut app).await;

        assert_eq!(clipboard.writes(), vec!["gist".to_string()]);
        assert!(app.toast.is_some());
        // 'y' never reached the composer
        assert_eq!(app.composer.text(), "text");
    }

    #[tokio::test]
    async fn test_esc_cancels_pending_request() {
        let engine = GatedEngine::new();
        let mut app = new_app(Summarizer::new(engine.clone(), RecordingClipboard::new()));
        type_str(&mut app, "text");
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(wait_until(|| engine.calls() == 1).await);

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.summarizer.is_pending());
        assert!(wait_until(|| engine.was_abandoned()).await);
    }

    #[tokio::test]
    async fn test_help_modal_swallows_keys() {
        let mut app = new_app(Summarizer::new(
            ScriptedEngine::new([]),
            RecordingClipboard::new(),
        ));
        press(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        assert!(app.modal.is_some());

        type_str(&mut app, "abc");
        assert_eq!(app.composer.text(), "");

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_only_ui_thread_panics_reach_the_terminal() {
        let ui = std::thread::current().id();
        let worker = std::thread::spawn(|| std::thread::current().id())
            .join()
            .unwrap();

        assert!(reports_to_terminal(ui, ui));
        assert!(!reports_to_terminal(ui, worker));
    }

    #[tokio::test]
    async fn test_ctrl_q_quits() {
        let mut app = new_app(Summarizer::new(
            ScriptedEngine::new([]),
            RecordingClipboard::new(),
        ));
        press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
