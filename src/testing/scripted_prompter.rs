use crate::domain::AppError;
use crate::ports::Prompter;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Prompter that replays canned answers in order and records every prompt shown.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    pub asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            asked: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn get_asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_non_empty(&self, prompt: &str, _empty_message: &str) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers.lock().unwrap().pop_front().ok_or_else(|| AppError::Prompt {
            what: prompt.to_string(),
            details: "no scripted answer left".to_string(),
        })
    }
}
