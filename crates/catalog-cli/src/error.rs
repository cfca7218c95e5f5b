//! Error handling for the Catalog CLI.
//!
//! This module provides a hierarchical error type system using `thiserror`.
//! Every failure during startup propagates unchanged to the single top-level
//! handler in `main`, so each variant carries enough context to be reported
//! on its own.
//!
//! # Architecture
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Stage errors** (`ResolveError`, `BundlerError`, `LaunchError`) map to the
//!   resolution, assembly and launch stages of startup
//! - **Error conversion** is automatic via `#[from]` attributes
//! - **Hints** are appended to messages after a `Hint:` marker and become the
//!   diagnostic's help text when reported

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

mod miette;

pub use self::miette::cli_error_to_miette;
pub use catalog_config::ConfigError;

/// Top-level CLI error type.
///
/// This is the primary error type returned by the startup sequence. It
/// automatically converts from the stage-specific errors via `From`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file errors (invalid syntax, wrong field types, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Framework detection, path resolution and port allocation errors
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// Bundler configuration errors
    #[error("Bundler configuration error: {0}")]
    Bundler(#[from] BundlerError),

    /// Scaffolding and dev server startup errors
    #[error("{0}")]
    Launch(#[from] LaunchError),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while resolving the runtime configuration.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// `package.json` exists but could not be read or parsed
    #[error("Failed to read {}: {message}\n\nHint: Check that package.json is valid JSON", .path.display())]
    PackageJson {
        /// Location of the offending file
        path: PathBuf,
        /// Underlying read or parse error
        message: String,
    },

    /// The project root could not be determined
    #[error("Failed to determine the project directory: {0}")]
    ProjectRoot(#[source] std::io::Error),

    /// No port could be bound
    #[error("No available port found (requested {requested})\n\nHint: Free the port or pass a different --port")]
    NoAvailablePort {
        /// Port that was asked for
        requested: u16,
    },
}

/// Errors raised while assembling the bundler configuration.
#[derive(Debug, Error)]
pub enum BundlerError {
    /// The configuration file override could not be applied
    #[error("Failed to apply the 'webpack' override from {source_name}: {message}\n\nHint: Override keys must match the bundler configuration layout")]
    Override {
        /// Where the override came from
        source_name: String,
        /// What went wrong
        message: String,
    },

    /// The generated configuration is unusable
    #[error("{0}")]
    Invalid(String),
}

/// Errors raised while preparing and starting the dev server.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Catalog scaffolding could not be written
    #[error("Failed to prepare {}: {source}", .path.display())]
    Setup {
        /// File or directory being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configured host does not resolve to a socket address
    #[error("Could not resolve host '{host}'")]
    UnresolvedHost {
        /// Host as given on the command line
        host: String,
    },

    /// The server could not bind its address
    #[error("Failed to bind to {addr}: {message}")]
    Bind {
        /// Address the server tried to bind
        addr: SocketAddr,
        /// Underlying error
        message: String,
    },

    /// HTTPS was requested without certificate material
    #[error("HTTPS requires a certificate and key\n\nHint: Set webpack.devServer.https.cert and webpack.devServer.https.key in catalog.config.toml")]
    MissingCertificate,

    /// Certificate or key could not be loaded
    #[error("Failed to load TLS certificate: {0}")]
    Tls(String),

    /// The proxy target is not a valid URL
    #[error("Invalid proxy target '{target}': {message}")]
    InvalidProxy {
        /// Proxy target as given
        target: String,
        /// Parse error
        message: String,
    },

    /// The server task ended with an error
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_error_has_hint() {
        let err = ResolveError::PackageJson {
            path: PathBuf::from("/app/package.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/app/package.json"));
        assert!(msg.contains("expected value"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_no_available_port_names_port() {
        let err = ResolveError::NoAvailablePort { requested: 4000 };
        assert!(err.to_string().contains("requested 4000"));
    }

    #[test]
    fn test_override_error_names_source() {
        let err = BundlerError::Override {
            source_name: "catalog.config.toml".to_string(),
            message: "invalid type: string, expected a sequence".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("catalog.config.toml"));
        assert!(msg.contains("expected a sequence"));
    }

    #[test]
    fn test_missing_certificate_has_hint() {
        let msg = LaunchError::MissingCertificate.to_string();
        assert!(msg.contains("webpack.devServer.https.cert"));
    }

    #[test]
    fn test_cli_error_from_stage_errors() {
        let err: CliError = ResolveError::NoAvailablePort { requested: 1 }.into();
        assert!(matches!(err, CliError::Resolve(_)));

        let err: CliError = BundlerError::Invalid("bad".to_string()).into();
        assert!(matches!(err, CliError::Bundler(_)));

        let err: CliError = LaunchError::MissingCertificate.into();
        assert!(matches!(err, CliError::Launch(_)));

        let err: CliError = ConfigError::InvalidValue {
            field: "webpack".to_string(),
            hint: None,
        }
        .into();
        assert!(matches!(err, CliError::Config(_)));
    }
}
