use crate::domain::AppError;

/// Port for blocking operator input.
pub trait Prompter {
    /// Ask until a non-empty answer is given.
    ///
    /// A cancelled prompt is reported as [`AppError::Interrupted`].
    fn read_non_empty(&self, prompt: &str, empty_message: &str) -> Result<String, AppError>;
}
