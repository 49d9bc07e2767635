// Configuration loading

pub mod credentials;
pub mod settings;

pub use credentials::{resolve_api_key, resolve_api_key_with, API_KEY_ENV};
pub use settings::{ConfigError, Settings};
