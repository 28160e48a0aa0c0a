//! Structured logging setup for pysift
//!
//! Initialization and configuration for structured logging using the
//! `tracing` ecosystem. The harness embedding this crate typically calls
//! [`init_from_env`] once at startup; everything else is plain `tracing`
//! macros throughout the extraction modules.
//!
//! # Features
//!
//! - Console output with pretty formatting (default)
//! - Optional JSON output for production environments
//! - Environment-based configuration via `RUST_LOG`
//! - Thread-safe, can only be initialized once
//!
//! # Example
//!
//! ```no_run
//! use pysift::util::logging;
//!
//! // Initialize with default configuration
//! logging::init_default();
//!
//! // Or initialize from environment variables
//! logging::init_from_env();
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format (for structured logging in production)
    pub use_json: bool,

    /// Include the module target (e.g., pysift::scanner) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    /// Defaults: INFO level, pretty console output, targets on, location
    /// and thread IDs off
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with the specified level
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Creates a logging configuration for production use
    ///
    /// This enables JSON output and includes more metadata for structured
    /// logging.
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }

    /// Creates a logging configuration for development use
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

/// Parses a log level from a string, falling back to INFO
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the logging system with the provided configuration
///
/// Can only be called once; subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive(format!("pysift={}", config.level).parse().unwrap());

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        }
    });
}

/// Initializes logging with default configuration
pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from environment variables
///
/// Reads `PYSIFT_LOG_LEVEL` (trace|debug|info|warn|error) and
/// `PYSIFT_LOG_JSON` (true|false); `RUST_LOG` still applies for standard
/// filtering. Falls back to defaults when unset.
pub fn init_from_env() {
    let level_str = env::var("PYSIFT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level = parse_level(&level_str);

    let use_json = env::var("PYSIFT_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    let config = LoggingConfig {
        level,
        use_json,
        ..Default::default()
    };

    init_logging(config);
}
