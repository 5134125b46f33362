//! Spotify Playlist Viewer
//!
//! This library implements a small web front-end that signs a user in with
//! Spotify via the OAuth2 authorization-code flow and renders that user's
//! playlists together with some derived statistics. It contains modules for
//! the HTTP surface, the outbound Spotify Web API client, session handling,
//! and presentation.
//!
//! # Modules
//!
//! - `aggregate` - Builds the playlist display model from API responses
//! - `api` - HTTP request handlers for the web server
//! - `config` - Configuration loaded from environment variables
//! - `error` - Request-level error types and their HTTP mapping
//! - `render` - HTML output for the browser
//! - `server` - Router construction and server startup
//! - `session` - Signed-cookie session store
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and wire type definitions
//! - `utils` - Utility functions and helpers

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so values
/// can cross async boundaries. Mainly used for startup plumbing where the
/// precise error type does not matter to the caller; request handlers use
/// [`error::ApiError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only intended for unrecoverable startup errors such as an unusable listen
/// address. The process terminates with exit code 1 after printing.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
