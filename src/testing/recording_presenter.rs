use crate::ports::Presenter;
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    Object { label: String, value: Value },
    ProgressStarted(String),
    ProgressStopped,
}

#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub events: Arc<Mutex<Vec<PresenterEvent>>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn object(&self, label: &str) -> Option<Value> {
        self.events().into_iter().find_map(|event| match event {
            PresenterEvent::Object { label: l, value } if l == label => Some(value),
            _ => None,
        })
    }

    pub fn stop_count(&self) -> usize {
        self.events().iter().filter(|event| **event == PresenterEvent::ProgressStopped).count()
    }
}

impl Presenter for RecordingPresenter {
    fn write_object(&self, label: &str, value: &Value) {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::Object { label: label.to_string(), value: value.clone() });
    }

    fn start_progress(&self, label: &str) {
        self.events.lock().unwrap().push(PresenterEvent::ProgressStarted(label.to_string()));
    }

    fn stop_progress(&self) {
        self.events.lock().unwrap().push(PresenterEvent::ProgressStopped);
    }
}
