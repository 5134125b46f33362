//! Signed-cookie session store.
//!
//! The session lives entirely in the browser: each attribute is one signed
//! cookie, and integrity rests on the server-held signing key derived from
//! the configured session secret. There is no server-side state and no
//! explicit expiry; lifetime matches the browser's cookie retention. One
//! session cannot observe another's token by construction.

use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

/// Session key holding the bearer access token after a completed login.
pub const ACCESS_TOKEN: &str = "access_token";

/// Session key holding the OAuth `state` nonce between login and callback.
pub const OAUTH_STATE: &str = "oauth_state";

/// Reads a session attribute. Returns `None` for absent cookies and for
/// cookies whose signature does not verify.
pub fn get(jar: &SignedCookieJar, key: &str) -> Option<String> {
    jar.get(key).map(|cookie| cookie.value().to_string())
}

/// Writes a session attribute, overwriting any previous value.
pub fn set(jar: SignedCookieJar, key: &'static str, value: String) -> SignedCookieJar {
    let cookie = Cookie::build((key, value)).path("/").http_only(true).build();
    jar.add(cookie)
}

/// Removes a session attribute. Removal takes effect with the response that
/// carries the resulting jar.
pub fn clear(jar: SignedCookieJar, key: &'static str) -> SignedCookieJar {
    jar.remove(Cookie::build(key).path("/").build())
}
