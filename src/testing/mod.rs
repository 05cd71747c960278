pub mod fake_sku_catalog;
pub mod recording_presenter;
pub mod scripted_prompter;

pub use fake_cart_service::FakeCartService;
pub use fake_sku_catalog::{FakeSkuCatalog, SkuLookup};
pub use recording_presenter::{PresenterEvent, RecordingPresenter};
pub use scripted_prompter::ScriptedPrompter;
