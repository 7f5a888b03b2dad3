//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Posts collection of the public test API
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Post loaded by the fetch-style GET
pub const FETCH_POST_ID: &str = "1";

/// Post loaded by the legacy-style GET
pub const LEGACY_POST_ID: &str = "2";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "postboard.log";

/// Directory under $HOME holding the optional config file
pub const CONFIG_DIR_NAME: &str = ".postboard";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Application name
pub const APP_NAME: &str = "Postboard";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
