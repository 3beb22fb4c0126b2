use super::testing::{wait_until, GatedEngine, RecordingClipboard, ScriptedEngine, Step};
use super::*;

fn summarizer_with(engine: Arc<dyn SummaryEngine>, clipboard: Arc<dyn Clipboard>) -> Summarizer {
    Summarizer::new(engine, clipboard)
}

fn scripted(steps: impl IntoIterator<Item = Step>) -> (Summarizer, Arc<ScriptedEngine>) {
    let engine = ScriptedEngine::new(steps);
    let summarizer = summarizer_with(engine.clone(), RecordingClipboard::new());
    (summarizer, engine)
}

// ─────────────────────────────────────────────────────────────────────────────
// Requesting
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_input_does_nothing() {
    let (mut summarizer, engine) = scripted([Step::summary("never")]);

    assert!(!summarizer.can_request());
    assert_eq!(summarizer.request_summary(), RequestOutcome::EmptyInput);
    assert!(!summarizer.is_pending());
    assert_eq!(summarizer.outcome(), &SummaryOutcome::Empty);

    tokio::task::yield_now().await;
    assert!(engine.inputs().is_empty());
}

#[tokio::test]
async fn test_whitespace_counts_as_input() {
    let (mut summarizer, engine) = scripted([Step::summary("blank")]);
    summarizer.set_input("   ");

    assert!(summarizer.can_request());
    assert_eq!(summarizer.request_summary(), RequestOutcome::Started(1));
    summarizer.settle().await;
    assert_eq!(engine.inputs(), vec!["   ".to_string()]);
}

#[tokio::test]
async fn test_success_stores_first_record() {
    let (mut summarizer, engine) = scripted([Step::Reply(vec![
        SummaryRecord::new("first"),
        SummaryRecord::new("second"),
    ])]);
    summarizer.set_input("A long article");

    assert_eq!(summarizer.trigger_label(), LABEL_IDLE);
    assert_eq!(summarizer.request_summary(), RequestOutcome::Started(1));
    assert!(summarizer.is_pending());
    assert!(!summarizer.can_request());
    assert_eq!(summarizer.trigger_label(), LABEL_PENDING);

    assert_eq!(summarizer.settle().await, None);
    assert!(!summarizer.is_pending());
    assert_eq!(summarizer.trigger_label(), LABEL_IDLE);
    assert_eq!(
        summarizer.outcome(),
        &SummaryOutcome::Success("first".to_string())
    );
    assert_eq!(engine.inputs(), vec!["A long article".to_string()]);
}

#[tokio::test]
async fn test_engine_error_becomes_failure() {
    let (mut summarizer, _engine) = scripted([Step::Fail(EngineError::NetworkError(
        "connection refused".to_string(),
    ))]);
    summarizer.set_input("text");
    assert!(!summarizer.is_pending());
    summarizer.request_summary();
    assert!(summarizer.is_pending());
    summarizer.settle().await;

    assert!(!summarizer.is_pending());
    assert!(summarizer.outcome().is_failure());
    assert_eq!(
        summarizer.display_text().as_deref(),
        Some("Error during summarization: Network error: connection refused")
    );
}

#[tokio::test]
async fn test_zero_records_is_a_failure() {
    let (mut summarizer, _engine) = scripted([Step::Reply(Vec::new())]);
    summarizer.set_input("text");
    summarizer.request_summary();
    assert!(summarizer.is_pending());
    summarizer.settle().await;

    assert!(!summarizer.is_pending());
    assert_eq!(
        summarizer.outcome(),
        &SummaryOutcome::Failure("Engine returned no summary".to_string())
    );
}

#[tokio::test]
async fn test_panic_leaves_result_untouched() {
    let (mut summarizer, _engine) = scripted([
        Step::summary("kept"),
        Step::Panic("engine blew up"),
    ]);
    summarizer.set_input("text");
    summarizer.request_summary();
    summarizer.settle().await;

    assert_eq!(summarizer.request_summary(), RequestOutcome::Started(2));
    assert!(summarizer.is_pending());
    summarizer.settle().await;

    assert!(!summarizer.is_pending());
    assert_eq!(
        summarizer.outcome(),
        &SummaryOutcome::Success("kept".to_string())
    );
}

#[tokio::test]
async fn test_new_result_replaces_old_failure() {
    let (mut summarizer, _engine) = scripted([
        Step::Fail(EngineError::RateLimited),
        Step::summary("recovered"),
    ]);
    summarizer.set_input("text");
    summarizer.request_summary();
    summarizer.settle().await;
    assert!(summarizer.outcome().is_failure());

    summarizer.request_summary();
    summarizer.settle().await;
    assert_eq!(summarizer.display_text().as_deref(), Some("recovered"));
}

#[tokio::test]
async fn test_editing_input_keeps_result() {
    let (mut summarizer, _engine) = scripted([Step::summary("sum")]);
    summarizer.set_input("first");
    summarizer.request_summary();
    summarizer.settle().await;

    summarizer.set_input("something else entirely");
    assert_eq!(summarizer.display_text().as_deref(), Some("sum"));

    summarizer.set_input("");
    assert!(!summarizer.can_request());
    assert_eq!(summarizer.display_text().as_deref(), Some("sum"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency: busy, cancel, stale results, drop
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_second_request_while_pending_is_busy() {
    let engine = GatedEngine::new();
    let mut summarizer = summarizer_with(engine.clone(), RecordingClipboard::new());
    summarizer.set_input("text");

    assert_eq!(summarizer.request_summary(), RequestOutcome::Started(1));
    assert_eq!(summarizer.request_summary(), RequestOutcome::Busy);
    assert!(wait_until(|| engine.calls() == 1).await);

    engine.release();
    summarizer.settle().await;
    assert_eq!(engine.calls(), 1);
    assert_eq!(summarizer.display_text().as_deref(), Some("gated: text"));
}

#[tokio::test]
async fn test_cancel_clears_pending_and_aborts_call() {
    let engine = GatedEngine::new();
    let mut summarizer = summarizer_with(engine.clone(), RecordingClipboard::new());
    summarizer.set_input("text");
    summarizer.request_summary();
    assert!(wait_until(|| engine.calls() == 1).await);

    assert!(summarizer.cancel());
    assert!(!summarizer.is_pending());
    assert_eq!(summarizer.outcome(), &SummaryOutcome::Empty);
    assert!(wait_until(|| engine.was_abandoned()).await);

    assert!(!summarizer.cancel());
    assert_eq!(summarizer.request_summary(), RequestOutcome::Started(2));
}

#[tokio::test]
async fn test_stale_result_is_discarded() {
    let (mut summarizer, _engine) = scripted([]);
    summarizer.set_input("text");

    let notice = summarizer.handle_event(LifecycleEvent::Resolved {
        request_id: 7,
        resolution: Resolution::Summarized(vec![SummaryRecord::new("late")]),
    });
    assert_eq!(notice, None);
    assert_eq!(summarizer.outcome(), &SummaryOutcome::Empty);
}

#[tokio::test]
async fn test_result_of_cancelled_request_is_ignored() {
    let engine = GatedEngine::new();
    let mut summarizer = summarizer_with(engine.clone(), RecordingClipboard::new());
    summarizer.set_input("text");
    summarizer.request_summary();
    summarizer.cancel();

    let RequestOutcome::Started(current) = summarizer.request_summary() else {
        panic!("expected a new request to start");
    };
    summarizer.handle_event(LifecycleEvent::Resolved {
        request_id: current - 1,
        resolution: Resolution::Failed(EngineError::RateLimited),
    });

    assert!(summarizer.is_pending());
    assert_eq!(summarizer.outcome(), &SummaryOutcome::Empty);
}

#[tokio::test]
async fn test_drop_aborts_in_flight_request() {
    let engine = GatedEngine::new();
    let mut summarizer = summarizer_with(engine.clone(), RecordingClipboard::new());
    summarizer.set_input("text");
    summarizer.request_summary();
    assert!(wait_until(|| engine.calls() == 1).await);

    drop(summarizer);
    assert!(wait_until(|| engine.was_abandoned()).await);
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_copy_with_empty_result_is_noop() {
    let clipboard = RecordingClipboard::new();
    let mut summarizer = summarizer_with(ScriptedEngine::new([]), clipboard.clone());
    summarizer.set_input("text");

    assert!(!summarizer.copy_summary_to_clipboard());
    tokio::task::yield_now().await;
    assert_eq!(clipboard.attempts(), 0);
}

#[tokio::test]
async fn test_copy_writes_summary_and_notifies() {
    let clipboard = RecordingClipboard::new();
    let mut summarizer =
        summarizer_with(ScriptedEngine::new([Step::summary("S")]), clipboard.clone());
    summarizer.set_input("text");
    summarizer.request_summary();
    summarizer.settle().await;

    assert!(summarizer.copy_summary_to_clipboard());
    assert_eq!(summarizer.settle().await, Some(Notice::Copied));
    assert_eq!(clipboard.writes(), vec!["S".to_string()]);
}

#[tokio::test]
async fn test_copy_failure_has_no_notice() {
    let clipboard = RecordingClipboard::failing();
    let mut summarizer = summarizer_with(
        ScriptedEngine::new([Step::summary("S")]),
        clipboard.clone(),
    );
    summarizer.set_input("text");
    summarizer.request_summary();
    summarizer.settle().await;

    assert!(summarizer.copy_summary_to_clipboard());
    assert_eq!(summarizer.settle().await, None);
    assert_eq!(clipboard.attempts(), 1);
    assert_eq!(summarizer.display_text().as_deref(), Some("S"));
}

#[tokio::test]
async fn test_copy_twice_is_idempotent() {
    let clipboard = RecordingClipboard::new();
    let mut summarizer =
        summarizer_with(ScriptedEngine::new([Step::summary("S")]), clipboard.clone());
    summarizer.set_input("text");
    summarizer.request_summary();
    summarizer.settle().await;

    assert!(summarizer.copy_summary_to_clipboard());
    assert_eq!(summarizer.settle().await, Some(Notice::Copied));
    assert!(summarizer.copy_summary_to_clipboard());
    assert_eq!(summarizer.settle().await, Some(Notice::Copied));

    assert_eq!(clipboard.writes(), vec!["S".to_string(), "S".to_string()]);
    assert_eq!(clipboard.attempts(), 2);
    assert_eq!(summarizer.input(), "text");
    assert!(!summarizer.is_pending());
    assert_eq!(
        summarizer.outcome(),
        &SummaryOutcome::Success("S".to_string())
    );
}

#[tokio::test]
async fn test_copy_includes_failure_message() {
    let clipboard = RecordingClipboard::new();
    let mut summarizer = summarizer_with(
        ScriptedEngine::new([Step::Fail(EngineError::NotConfigured)]),
        clipboard.clone(),
    );
    summarizer.set_input("text");
    summarizer.request_summary();
    summarizer.settle().await;

    assert!(summarizer.copy_summary_to_clipboard());
    summarizer.settle().await;
    assert_eq!(
        clipboard.writes(),
        vec!["Error during summarization: Summarization engine not configured".to_string()]
    );
}

#[test]
fn test_panic_message_reads_common_payloads() {
    assert_eq!(panic_message(&"static str"), "static str");
    assert_eq!(panic_message(&String::from("owned")), "owned");
    assert_eq!(panic_message(&42_u32), "unknown panic");
}
