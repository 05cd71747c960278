mod config_reader;

pub use config_reader::{API_URL_ENV, CONFIG_FILE_NAME, CONFIG_PATH_ENV, load_config};
