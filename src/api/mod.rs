//! # API Module
//!
//! HTTP request handlers for the web front-end. Each submodule covers one
//! concern of the surface:
//!
//! - `home` - Landing page with the login entry point
//! - `auth` - OAuth2 handshake: `/login`, `/callback`, and `/logout`
//! - `playlists` - Protected playlist views backed by the aggregator
//! - `health` - Liveness endpoint for monitoring
//!
//! Handlers receive the shared application state and the signed cookie jar
//! explicitly through their signatures; there is no ambient session context.
//! Failures are expressed as [`crate::error::ApiError`] and mapped onto
//! responses by its `IntoResponse` implementation.

mod auth;
mod health;
mod home;
mod playlists;

pub use auth::{callback, login, logout};
pub use health::health;
pub use home::home;
pub use playlists::{playlist, playlists};
