//! # Spotify Integration Module
//!
//! Client layer for the two external Spotify services this application talks
//! to: the accounts service that runs the OAuth2 authorization-code flow and
//! the Web API that serves playlist data. This application is a client of
//! both contracts, not a designer of them; requests follow the provider's
//! documented shapes verbatim.
//!
//! ## Submodules
//!
//! - [`auth`] - Authorization URL construction and the code-for-token
//!   exchange against `POST /api/token`
//! - [`playlists`] - Authenticated GETs against `/me/playlists` and
//!   `/playlists/{id}/tracks`
//!
//! ## Error handling
//!
//! Every function returns [`crate::error::SpotifyError`], split into
//! transport failures, non-success statuses, and payloads that do not match
//! the expected shape. Callers decide which of those abort the request and
//! which degrade gracefully. There is no retry and no rate-limit handling;
//! each operation issues exactly the calls it names.

pub mod auth;
pub mod playlists;
