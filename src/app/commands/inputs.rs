//! Shared helpers for resolving operator input.

use crate::domain::AppError;
use crate::ports::Prompter;

/// Use a pre-supplied value when it is non-blank, otherwise ask for one.
pub(crate) fn obtain<P: Prompter>(
    prompter: &P,
    preset: Option<String>,
    prompt: &str,
    empty_message: &str,
) -> Result<String, AppError> {
    match preset.map(|value| value.trim().to_string()).filter(|value| !value.is_empty()) {
        Some(value) => Ok(value),
        None => prompter.read_non_empty(prompt, empty_message),
    }
}
