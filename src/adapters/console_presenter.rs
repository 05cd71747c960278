//! Terminal presenter: labeled JSON on stdout, spinner on stderr.

use std::cell::RefCell;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::ports::Presenter;

/// How objects are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Label line followed by indented JSON.
    #[default]
    Pretty,
    /// One compact JSON document per line, no labels or spinner.
    Json,
}

pub struct ConsolePresenter {
    format: OutputFormat,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsolePresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, spinner: RefCell::new(None) }
    }

    fn render(&self, label: &str, value: &Value) -> String {
        match self.format {
            OutputFormat::Pretty => {
                let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                format!("{}:\n{}\n", label, body)
            }
            OutputFormat::Json => value.to_string(),
        }
    }
}

impl Presenter for ConsolePresenter {
    fn write_object(&self, label: &str, value: &Value) {
        let spinner = self.spinner.borrow();
        let rendered = self.render(label, value);
        match spinner.as_ref() {
            Some(bar) => bar.suspend(|| println!("{}", rendered)),
            None => println!("{}", rendered),
        }
    }

    fn start_progress(&self, label: &str) {
        let bar = match self.format {
            OutputFormat::Json => ProgressBar::hidden(),
            OutputFormat::Pretty => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")
                {
                    bar.set_style(style);
                }
                bar.enable_steady_tick(Duration::from_millis(80));
                bar
            }
        };
        bar.set_message(format!("{}...", label));

        if let Some(previous) = self.spinner.replace(Some(bar)) {
            previous.finish_and_clear();
        }
    }

    fn stop_progress(&self) {
        if let Some(bar) = self.spinner.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}
