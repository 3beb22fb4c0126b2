// Test doubles for the summarizer: scripted engines and a recording clipboard

use crate::clipboard::{Clipboard, ClipboardError};
use crate::engine::{EngineError, SummaryEngine, SummaryRecord};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// What a scripted engine does on its next call
pub enum Step {
    Reply(Vec<SummaryRecord>),
    Fail(EngineError),
    Panic(&'static str),
}

impl Step {
    pub fn summary(text: &str) -> Self {
        Self::Reply(vec![SummaryRecord::new(text)])
    }
}

/// Engine that plays back a fixed list of steps and records its inputs
#[derive(Default)]
pub struct ScriptedEngine {
    steps: Mutex<VecDeque<Step>>,
    inputs: Mutex<Vec<String>>,
}

impl ScriptedEngine {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into_iter().collect()),
            inputs: Mutex::new(Vec::new()),
        })
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryEngine for ScriptedEngine {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_ready(&self) -> bool {
        true
    }

    async fn summarize(&self, text: &str) -> Result<Vec<SummaryRecord>, EngineError> {
        self.inputs.lock().unwrap().push(text.to_string());
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(records)) => Ok(records),
            Some(Step::Fail(error)) => Err(error),
            Some(Step::Panic(message)) => panic!("{}", message),
            None => Err(EngineError::Internal("script exhausted".to_string())),
        }
    }
}

/// Engine that blocks until released, and notices when its call is dropped
#[derive(Default)]
pub struct GatedEngine {
    gate: Notify,
    calls: AtomicUsize,
    abandoned: Arc<AtomicBool>,
}

impl GatedEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Let one waiting call finish
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// True once an in-progress call was dropped before finishing
    pub fn was_abandoned(&self) -> bool {
        self.abandoned.load(Ordering::SeqCst)
    }
}

struct AbandonGuard {
    flag: Arc<AtomicBool>,
    armed: bool,
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if self.armed {
            self.flag.store(true, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl SummaryEngine for GatedEngine {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn is_ready(&self) -> bool {
        true
    }

    async fn summarize(&self, text: &str) -> Result<Vec<SummaryRecord>, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut guard = AbandonGuard {
            flag: Arc::clone(&self.abandoned),
            armed: true,
        };
        self.gate.notified().await;
        guard.armed = false;
        Ok(vec![SummaryRecord::new(format!("gated: {}", text))])
    }
}

/// Clipboard that records writes, optionally failing every one
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingClipboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// Every call to `write_text`, failed or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Yield until `condition` holds, giving spawned tasks a chance to run
pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::task::yield_now().await;
    }
    condition()
}
