//! Error types for todobar
//!
//! Every fatal condition surfaces as an [`Error`] and travels up to the
//! binary's `main`, which is the only place that exits the process.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a todobar run
#[derive(Debug, Error)]
pub enum Error {
    /// The API token could not be read from the platform secret store
    #[error("failed to read secret {service}/{account} from the keychain: {message}")]
    SecretStore {
        /// Keychain service name
        service: String,
        /// Keychain account name
        account: String,
        /// Reason reported by the store
        message: String,
    },

    /// Transport or decoding failure talking to the Todoist API
    #[error("request to Todoist failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Todoist API answered with a non-success status
    #[error("GET {url} returned {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code returned by the API
        status: reqwest::StatusCode,
    },

    /// No project carries the configured name
    #[error("project does not exist: {0}")]
    ProjectNotFound(String),

    /// The configured output template could not be read
    #[error("failed to read output template {}: {source}", path.display())]
    TemplateRead {
        /// Template path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The output template is malformed or references missing fields
    #[error("failed to render output template: {0}")]
    Render(#[from] handlebars::RenderError),

    /// The config file exists but could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys
    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Parse error
        source: toml::de::Error,
    },

    /// Writing the rendered output failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
