//! Summarizer component - the request/response lifecycle
//!
//! Owns the three pieces of session state (input text, result slot, pending
//! flag) and the two user operations (request a summary, copy it).
//!
//! # Lifecycle
//!
//! ```text
//!            request_summary()                 handle_event(Resolved)
//!   Idle ───────────────────────▶ Requesting ───────────────────────▶ Idle
//!    ▲                                │
//!    └────────── cancel() / drop ─────┘
//! ```
//!
//! Work happens in spawned tasks. Their results come back as
//! [`LifecycleEvent`]s on the component's own channel; the owner pulls them
//! with [`Summarizer::next_event`] and applies them with
//! [`Summarizer::handle_event`]. The TUI does this inside its `select!` loop,
//! the headless CLI via [`Summarizer::settle`].
//!
//! All methods that spawn work must be called from within a Tokio runtime.

mod outcome;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;

pub use outcome::{SummaryOutcome, ERROR_PREFIX};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::engine::{EngineError, SummaryEngine, SummaryRecord};
use crate::util::one_line_preview;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Trigger label while idle
pub const LABEL_IDLE: &str = "Summarize";

/// Trigger label while a request is in flight
pub const LABEL_PENDING: &str = "Summarizing...";

/// Result of asking for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A request was started with this id
    Started(u64),
    /// Input is empty; nothing happened
    EmptyInput,
    /// A request is already in flight; nothing happened
    Busy,
}

/// How an engine task finished
#[derive(Debug)]
pub enum Resolution {
    /// The engine returned records
    Summarized(Vec<SummaryRecord>),
    /// The engine returned an error
    Failed(EngineError),
    /// The engine task panicked
    Crashed(String),
}

/// Completion messages produced by spawned work
#[derive(Debug)]
pub enum LifecycleEvent {
    Resolved {
        request_id: u64,
        resolution: Resolution,
    },
    CopyFinished(Result<(), ClipboardError>),
}

/// Something the user should be told about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The summary landed on the clipboard
    Copied,
}

struct InFlight {
    id: u64,
    handle: JoinHandle<()>,
}

pub struct Summarizer {
    input: String,
    outcome: SummaryOutcome,
    in_flight: Option<InFlight>,
    last_request_id: u64,
    engine: Arc<dyn SummaryEngine>,
    clipboard: Arc<dyn Clipboard>,
    events_tx: mpsc::UnboundedSender<LifecycleEvent>,
    events_rx: mpsc::UnboundedReceiver<LifecycleEvent>,
}

impl Summarizer {
    pub fn new(engine: Arc<dyn SummaryEngine>, clipboard: Arc<dyn Clipboard>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            input: String::new(),
            outcome: SummaryOutcome::Empty,
            in_flight: None,
            last_request_id: 0,
            engine,
            clipboard,
            events_tx,
            events_rx,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text (synchronous, never touches the result slot)
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn outcome(&self) -> &SummaryOutcome {
        &self.outcome
    }

    pub fn display_text(&self) -> Option<String> {
        self.outcome.display_text()
    }

    /// Whether a request is in flight
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the trigger should be enabled
    pub fn can_request(&self) -> bool {
        !self.input.is_empty() && !self.is_pending()
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.is_pending() {
            LABEL_PENDING
        } else {
            LABEL_IDLE
        }
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Start summarizing the current input
    ///
    /// The engine is invoked exactly once with a snapshot of the input. The
    /// result slot is only overwritten when the request resolves.
    pub fn request_summary(&mut self) -> RequestOutcome {
        if self.input.is_empty() {
            return RequestOutcome::EmptyInput;
        }
        if let Some(in_flight) = &self.in_flight {
            tracing::debug!(
                request_id = in_flight.id,
                "Summary requested while another is in flight"
            );
            return RequestOutcome::Busy;
        }

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        let engine = Arc::clone(&self.engine);
        let events_tx = self.events_tx.clone();
        let text = self.input.clone();

        tracing::info!(
            request_id,
            engine = engine.name(),
            chars = text.chars().count(),
            preview = %one_line_preview(&text, 60),
            "Summarization requested"
        );

        let handle = tokio::spawn(async move {
            let resolution = match AssertUnwindSafe(engine.summarize(&text))
                .catch_unwind()
                .await
            {
                Ok(Ok(records)) => Resolution::Summarized(records),
                Ok(Err(e)) => Resolution::Failed(e),
                Err(payload) => Resolution::Crashed(panic_message(payload.as_ref())),
            };
            // Receiver is gone only if the summarizer was dropped
            let _ = events_tx.send(LifecycleEvent::Resolved {
                request_id,
                resolution,
            });
        });

        self.in_flight = Some(InFlight {
            id: request_id,
            handle,
        });
        RequestOutcome::Started(request_id)
    }

    /// Abort the in-flight request, if any
    ///
    /// Pending is cleared immediately and the result slot keeps its value.
    /// Returns true if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.handle.abort();
                tracing::info!(request_id = in_flight.id, "Summarization cancelled");
                true
            }
            None => false,
        }
    }

    /// Copy the displayed result to the clipboard
    ///
    /// Fire-and-forget: returns false without touching the clipboard when
    /// there is nothing to copy. Completion arrives as `CopyFinished`.
    pub fn copy_summary_to_clipboard(&self) -> bool {
        let Some(text) = self.outcome.display_text() else {
            return false;
        };

        let clipboard = Arc::clone(&self.clipboard);
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = clipboard.write_text(&text).await;
            let _ = events_tx.send(LifecycleEvent::CopyFinished(result));
        });
        true
    }

    /// Wait for the next completion from spawned work
    pub async fn next_event(&mut self) -> Option<LifecycleEvent> {
        self.events_rx.recv().await
    }

    /// Apply a completion to the component state
    pub fn handle_event(&mut self, event: LifecycleEvent) -> Option<Notice> {
        match event {
            LifecycleEvent::Resolved {
                request_id,
                resolution,
            } => {
                self.resolve(request_id, resolution);
                None
            }
            LifecycleEvent::CopyFinished(Ok(())) => {
                tracing::info!("Summary copied to clipboard");
                Some(Notice::Copied)
            }
            LifecycleEvent::CopyFinished(Err(e)) => {
                tracing::error!("Failed to copy: {}", e);
                None
            }
        }
    }

    /// Wait for the next completion and apply it
    pub async fn settle(&mut self) -> Option<Notice> {
        let event = self.next_event().await?;
        self.handle_event(event)
    }

    fn resolve(&mut self, request_id: u64, resolution: Resolution) {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == request_id => {}
            _ => {
                tracing::debug!(request_id, "Discarding stale summarization result");
                return;
            }
        }
        // Pending clears on every path below
        self.in_flight = None;

        match resolution {
            Resolution::Summarized(records) => match records.into_iter().next() {
                Some(record) => {
                    tracing::info!(
                        request_id,
                        chars = record.summary_text.chars().count(),
                        "Summarization complete"
                    );
                    self.outcome = SummaryOutcome::Success(record.summary_text);
                }
                None => self.fail(request_id, EngineError::EmptyResponse),
            },
            Resolution::Failed(error) => self.fail(request_id, error),
            Resolution::Crashed(message) => {
                tracing::warn!(request_id, "Summarization task failed: {}", message);
            }
        }
    }

    fn fail(&mut self, request_id: u64, error: EngineError) {
        tracing::error!(request_id, "{}: {}", ERROR_PREFIX, error);
        self.outcome = SummaryOutcome::Failure(error.to_string());
    }
}

impl Drop for Summarizer {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}

/// Human-readable text of a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
