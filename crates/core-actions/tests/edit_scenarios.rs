use core_actions::{DispatchResult, EditObserver, EditPolicy, EditSession, MaxLength, dispatch};
use core_events::{Event, KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::dispatcher::{Dispatch, with_default};
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Default)]
struct Calls {
    changes: u32,
    enters: u32,
}

impl EditObserver for Calls {
    fn on_change(&mut self) {
        self.changes += 1;
    }
    fn on_enter(&mut self) {
        self.enters += 1;
    }
}

struct Harness {
    content: String,
    cursor: usize,
    policy: EditPolicy,
    calls: Calls,
}

impl Harness {
    fn new(content: &str, cursor: usize) -> Self {
        Self {
            content: content.to_string(),
            cursor,
            policy: EditPolicy::default(),
            calls: Calls::default(),
        }
    }

    fn send(&mut self, event: Event) -> DispatchResult {
        let mut session = EditSession::new(
            &mut self.content,
            &mut self.cursor,
            self.policy,
            &mut self.calls,
        );
        dispatch(&event, &mut session)
    }
}

#[test]
fn typing_appends_at_end_and_notifies_once() {
    let mut h = Harness::new("hello", 5);
    let r = h.send(Event::character('X'));
    assert!(r.handled);
    assert_eq!(h.content, "helloX");
    assert_eq!(h.cursor, 6);
    assert_eq!(h.calls.changes, 1);
}

#[test]
fn overwrite_mode_replaces_character_at_cursor() {
    let mut h = Harness::new("ab", 1);
    h.policy.insert = false;
    h.send(Event::character('Z'));
    assert_eq!(h.content, "aZ");
    assert_eq!(h.cursor, 2);
}

#[test]
fn return_in_single_line_mode_only_fires_enter() {
    let mut h = Harness::new("abc", 1);
    let r = h.send(Event::RETURN);
    assert_eq!(r, DispatchResult { handled: true, dirty: false });
    assert_eq!(h.content, "abc");
    assert_eq!(h.calls.enters, 1);
}

#[test]
fn return_in_multiline_mode_respects_max_length() {
    let mut h = Harness::new("ab", 2);
    h.policy.multiline = true;
    h.policy.max_len = MaxLength::bytes(2);
    let r = h.send(Event::RETURN);
    assert!(r.handled);
    assert_eq!(h.content, "ab");
    assert_eq!(h.calls.enters, 1);
}

#[test]
fn ctrl_chords_are_not_characters() {
    let mut h = Harness::new("", 0);
    let r = h.send(Event::key(KeyCode::Char('a'), KeyModifiers::CTRL));
    assert_eq!(r, DispatchResult::ignored());
    let r = h.send(Event::key(KeyCode::Char('A'), KeyModifiers::SHIFT));
    assert!(r.handled);
    assert_eq!(h.content, "A");
}

#[test]
fn backspace_sequence_walks_to_start_then_bubbles() {
    let mut h = Harness::new("é漢a", 6);
    for expected in ["é漢", "é", ""] {
        assert!(h.send(Event::BACKSPACE).handled);
        assert_eq!(h.content, expected);
    }
    assert!(!h.send(Event::BACKSPACE).handled);
    assert_eq!(h.calls.changes, 3);
}

#[test]
fn external_shrink_is_clamped_before_handling() {
    let mut h = Harness::new("hello", 5);
    h.content.truncate(2);
    h.send(Event::character('!'));
    assert_eq!(h.content, "he!");
    assert_eq!(h.cursor, 3);
}

#[test]
fn byte_and_code_point_limits_diverge() {
    let mut bytes = Harness::new("漢", 3);
    bytes.policy.max_len = MaxLength::bytes(3);
    bytes.send(Event::character('x'));
    assert_eq!(bytes.content, "漢");

    let mut points = Harness::new("漢", 3);
    points.policy.max_len = MaxLength::code_points(3);
    points.send(Event::character('x'));
    points.send(Event::character('y'));
    points.send(Event::character('z'));
    assert_eq!(points.content, "漢xy");
}

#[test]
fn paste_stops_at_byte_limit() {
    let mut h = Harness::new("", 0);
    h.policy.max_len = MaxLength::bytes(3);
    let r = h.send(Event::Text("abcdefghij".into()));
    assert_eq!(r, DispatchResult { handled: true, dirty: true });
    assert_eq!(h.content, "abc");
    assert_eq!(h.cursor, 3);
    assert_eq!(h.calls.changes, 1);

    let r = h.send(Event::Text("more".into()));
    assert_eq!(r, DispatchResult { handled: true, dirty: false });
    assert_eq!(h.content, "abc");
}

#[test]
fn paste_stops_at_code_point_limit() {
    let mut h = Harness::new("", 0);
    h.policy.max_len = MaxLength::code_points(3);
    h.send(Event::Text("abcdefghij".into()));
    assert_eq!(h.content, "abc");

    let mut wide = Harness::new("", 0);
    wide.policy.max_len = MaxLength::code_points(3);
    wide.send(Event::Text("漢字テスト".into()));
    assert_eq!(wide.content, "漢字テ");
    assert_eq!(wide.cursor, 9);
}

#[test]
fn multiline_paste_keeps_newlines() {
    let mut h = Harness::new("", 0);
    h.policy.multiline = true;
    assert!(h.send(Event::Text("a\r\nb".into())).handled);
    assert_eq!(h.content, "a\nb");
    assert_eq!(h.calls.enters, 0);

    let mut single = Harness::new("", 0);
    single.send(Event::Text("a\nb".into()));
    assert_eq!(single.content, "ab");
}

#[derive(Clone, Default)]
struct FieldCapture {
    records: Arc<Mutex<Vec<(String, String)>>>,
}

struct FieldCollector<'a>(&'a mut Vec<String>);

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0.push(format!("{}={:?}", field.name(), value));
    }
}

impl<S> Layer<S> for FieldCapture
where
    S: Subscriber,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::always()
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldCollector(&mut fields));
        self.records
            .lock()
            .unwrap()
            .push((event.metadata().target().to_string(), fields.join(" ")));
    }
}

#[test]
fn edit_logs_carry_offsets_but_never_text() {
    let capture = FieldCapture::default();
    let records = capture.records.clone();
    let subscriber = Registry::default().with(capture.with_filter(LevelFilter::TRACE));
    let dispatch = Dispatch::new(subscriber);

    with_default(&dispatch, || {
        let mut h = Harness::new("", 0);
        for ch in "hunter2".chars() {
            h.send(Event::character(ch));
        }
        h.send(Event::Text("s3cr3t".into()));
        h.send(Event::BACKSPACE);
        assert_eq!(h.content, "hunter2s3cr3");
    });

    let recorded = records.lock().unwrap();
    assert!(recorded.iter().any(|(t, _)| t == "actions.edit"));
    assert!(recorded.iter().any(|(t, _)| t == "actions.dispatch"));
    for (_, fields) in recorded.iter() {
        assert!(!fields.contains("hunter"), "leaked: {fields}");
        assert!(!fields.contains("s3cr3t"), "leaked: {fields}");
    }
}
