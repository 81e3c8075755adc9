#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::{Arc, Mutex},
};

use env_reader::{Diagnostic, DiagnosticSink, EnvironmentReader, Reason};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{Layer, Registry, layer::Context, prelude::*};

/// One captured diagnostic, owned so tests can inspect it after the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub key: String,
    pub value: Option<String>,
    pub reason: Reason,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Recorded>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<Recorded> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

impl DiagnosticSink for RecordingSink {
    fn record_fatal(&self, diagnostic: &Diagnostic<'_>, message: &str) {
        self.records.lock().unwrap().push(Recorded {
            key: diagnostic.key.to_string(),
            value: diagnostic.value.map(str::to_string),
            reason: diagnostic.reason,
            message: message.to_string(),
        });
    }
}

pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Reader over `pairs` with the default (silent) tracing sink.
pub fn reader(pairs: &[(&str, &str)]) -> EnvironmentReader<HashMap<String, String>> {
    EnvironmentReader::with_source(env(pairs))
}

/// Reader over `pairs` whose diagnostics can be inspected.
pub fn recording_reader(
    pairs: &[(&str, &str)],
) -> (EnvironmentReader<HashMap<String, String>>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let reader = EnvironmentReader::with_sink(env(pairs), Arc::clone(&sink));
    (reader, sink)
}

/// A `tracing` event as seen by a subscriber: its level and every field,
/// including `message`, rendered to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Layer that stores every event it sees.
#[derive(Clone, Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn take(&self) -> Vec<CapturedEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

/// Run `f` with a thread-local subscriber and return what it emitted.
pub fn capture_events(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let layer = CaptureLayer::default();
    let subscriber = Registry::default().with(layer.clone());
    tracing::subscriber::with_default(subscriber, f);
    layer.take()
}
