//! Output presentation port and the scoped progress guard.

use serde::Serialize;
use serde_json::Value;

use crate::domain::AppError;

/// Port for presenting objects and progress to the operator.
pub trait Presenter {
    /// Show a structured value under a label.
    fn write_object(&self, label: &str, value: &Value);

    /// Begin indicating that a long-running step is underway.
    fn start_progress(&self, label: &str);

    /// End the indication started by [`Presenter::start_progress`].
    fn stop_progress(&self);

    /// Serialize and show any value.
    fn show<T: Serialize>(&self, label: &str, value: &T) -> Result<(), AppError>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(value)?;
        self.write_object(label, &value);
        Ok(())
    }
}

/// Progress indication bound to a scope; stopped exactly once when dropped.
#[must_use = "progress stops as soon as the scope is dropped"]
pub struct ProgressScope<'a, P: Presenter + ?Sized> {
    presenter: &'a P,
}

impl<'a, P: Presenter + ?Sized> ProgressScope<'a, P> {
    pub fn start(presenter: &'a P, label: &str) -> Self {
        presenter.start_progress(label);
        Self { presenter }
    }
}

impl<P: Presenter + ?Sized> Drop for ProgressScope<'_, P> {
    fn drop(&mut self) {
        self.presenter.stop_progress();
    }
}
