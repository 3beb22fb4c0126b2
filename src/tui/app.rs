// TUI application state
//
// App is the view shell: it owns the mounted Summarizer plus purely visual
// state (focus, scroll, toast, modal). Lifecycle decisions stay in the
// Summarizer; App only forwards user intents and renders the results.

use super::components::{Composer, SummaryPanel, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::summarizer::{LifecycleEvent, Notice, RequestOutcome, Summarizer};
use crate::theme::Theme;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Spinner frames for the pending indicator
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Toast text after a successful copy
pub const COPIED_TOAST: &str = "Copied to clipboard!";

/// Which panel receives component-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Result,
}

/// Main application state for the TUI
pub struct App {
    /// The mounted summarizer component
    pub summarizer: Summarizer,

    /// Multi-line input editor
    pub composer: Composer,

    /// Result panel scroll state
    pub summary_panel: SummaryPanel,

    /// Focused panel
    pub focus: Focus,

    /// Active modal overlay
    pub modal: Option<Modal>,

    /// Active toast notification
    pub toast: Option<Toast>,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Whether the log panel is visible
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Redraw tick from config
    pub tick_rate: Duration,

    /// Spinner position, advanced on every tick
    animation_frame: usize,

    /// Debounce for action keys
    input_handler: InputHandler,

    /// When the app started (for uptime display)
    start_time: Instant,
}

impl App {
    pub fn new(summarizer: Summarizer, log_buffer: LogBuffer, config: &Config) -> Self {
        Self {
            summarizer,
            composer: Composer::new(),
            summary_panel: SummaryPanel::new(),
            focus: Focus::default(),
            modal: None,
            toast: None,
            theme: Theme::by_name(&config.theme),
            log_buffer,
            show_logs: config.ui.show_logs,
            should_quit: false,
            tick_rate: Duration::from_millis(config.ui.tick_ms),
            animation_frame: 0,
            input_handler: InputHandler::default(),
            start_time: Instant::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // User intents
    // ─────────────────────────────────────────────────────────────────────

    /// Push the composer text into the summarizer's input
    pub fn sync_input(&mut self) {
        self.summarizer.set_input(self.composer.text());
    }

    /// Trigger a summary of the current input
    pub fn summarize(&mut self) {
        self.sync_input();
        match self.summarizer.request_summary() {
            RequestOutcome::Started(_) => {}
            RequestOutcome::EmptyInput => tracing::debug!("Summarize ignored: input is empty"),
            RequestOutcome::Busy => tracing::debug!("Summarize ignored: request in flight"),
        }
    }

    /// Copy the result to the clipboard (confirmation arrives later)
    pub fn copy_summary(&mut self) {
        if !self.summarizer.copy_summary_to_clipboard() {
            tracing::debug!("Copy ignored: nothing to copy");
        }
    }

    /// Cancel the in-flight request; returns true if there was one
    pub fn cancel_summary(&mut self) -> bool {
        if self.summarizer.cancel() {
            self.show_toast("Summary cancelled");
            true
        } else {
            false
        }
    }

    /// Apply a completion from the summarizer's task channel
    pub fn apply_lifecycle_event(&mut self, event: LifecycleEvent) {
        let resolved = matches!(event, LifecycleEvent::Resolved { .. });

        if let Some(Notice::Copied) = self.summarizer.handle_event(event) {
            self.show_toast(COPIED_TOAST);
        }

        if resolved {
            self.summary_panel.reset();
            // Nothing left to focus once the result panel disappears
            if !self.summarizer.outcome().has_content() {
                self.focus = Focus::Input;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus, panels, overlays
    // ─────────────────────────────────────────────────────────────────────

    /// Whether the result panel is visible
    pub fn result_visible(&self) -> bool {
        self.summarizer.outcome().has_content()
    }

    /// Toggle focus between input and result (result only when visible)
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.result_visible() => Focus::Result,
            _ => Focus::Input,
        };
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once it has expired
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation and timing
    // ─────────────────────────────────────────────────────────────────────

    /// Advance the spinner and expire the toast
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.clear_expired_toast();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.animation_frame % SPINNER_FRAMES.len()]
    }

    /// Session uptime as "1h 02m", "3m 07s" or "12s"
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        match (secs / 3600, (secs % 3600) / 60, secs % 60) {
            (0, 0, s) => format!("{}s", s),
            (0, m, s) => format!("{}m {:02}s", m, s),
            (h, m, _) => format!("{}h {:02}m", h, m),
        }
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}
