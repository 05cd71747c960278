pub mod console_presenter;
pub mod dialoguer_prompter;
pub mod partner_client_http;

pub use console_presenter::{ConsolePresenter, OutputFormat};
pub use dialoguer_prompter::DialoguerPrompter;
pub use partner_client_http::HttpPartnerClient;
