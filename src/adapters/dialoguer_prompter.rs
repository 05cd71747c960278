//! Interactive prompter backed by dialoguer.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Reads answers from the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn read_non_empty(&self, prompt: &str, empty_message: &str) -> Result<String, AppError> {
        let empty_message = empty_message.to_string();
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(move |input: &String| -> Result<(), String> {
                if input.trim().is_empty() { Err(empty_message.clone()) } else { Ok(()) }
            })
            .interact_text();

        match result {
            Ok(value) => Ok(value.trim().to_string()),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Interrupted)
            }
            Err(err) => Err(AppError::Prompt { what: prompt.to_string(), details: err.to_string() }),
        }
    }
}
