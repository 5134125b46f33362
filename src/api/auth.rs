use axum::extract::{Query, State};
use axum::response::Redirect;
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::{error::ApiError, server::AppState, session, spotify, utils};

/// Starts the handshake: remembers a fresh `state` nonce in the session and
/// sends the browser to the authorization service.
pub async fn login(
    State(app): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Redirect) {
    let nonce = utils::generate_state_token();
    let authorize_url = spotify::auth::build_authorize_url(&app.config, &nonce);
    let jar = session::set(jar, session::OAUTH_STATE, nonce);
    (jar, Redirect::to(&authorize_url))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// OAuth redirect target.
///
/// A request without a `code` fails before anything else happens; no
/// outbound call is made and the session is left untouched. With a code
/// present, the `state` nonce must match the one stored at login, then the
/// code is exchanged for an access token which replaces any previous token
/// in the session.
pub async fn callback(
    State(app): State<AppState>,
    jar: SignedCookieJar,
    Query(query): Query<CallbackQuery>,
) -> Result<(SignedCookieJar, Redirect), ApiError> {
    let code = match query.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => {
            return Err(match query.error {
                Some(reason) => ApiError::AuthorizationDenied(reason),
                None => ApiError::MissingAuthorizationCode,
            });
        }
    };

    let expected = session::get(&jar, session::OAUTH_STATE);
    if expected.is_none() || expected != query.state {
        return Err(ApiError::StateMismatch);
    }

    let token = spotify::auth::exchange_code(&app.http, &app.config, code)
        .await
        .map_err(ApiError::TokenExchange)?;

    let jar = session::clear(jar, session::OAUTH_STATE);
    let jar = session::set(jar, session::ACCESS_TOKEN, token.access_token);
    Ok((jar, Redirect::to("/playlists")))
}

/// Clears the session token and returns home. Takes effect immediately; the
/// next protected request redirects to `/login`.
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (session::clear(jar, session::ACCESS_TOKEN), Redirect::to("/"))
}
