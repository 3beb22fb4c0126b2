//! Input contract for focusable components
//!
//! The App routes keys through three layers: the modal (if any), global
//! shortcuts, then the focused component. Components report whether they
//! consumed a key so unhandled keys can fall through.
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! Modal (Help) ── absorbs everything while open
//!    │
//!    ▼
//! Global (Ctrl+S, Ctrl+Y, Tab, Esc, F1, Ctrl+L, Ctrl+Q)
//!    │
//!    ▼
//! Focused component (Composer or SummaryPanel)
//! ```

use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Components that handle keyboard input while focused
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;
}
