mod settings;

pub use settings::{GoogleCloudSettings, LlmSettings, LoggingSettings, ServerSettings, Settings};
