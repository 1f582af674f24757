//! Session Storage Access
//!
//! Reads the credentials the login page left in browser session storage.
//! Read-only: nothing in this crate ever writes the session.

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "userId";

fn read_key(key: &str) -> Option<String> {
    let storage = web_sys::window()?.session_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

/// Bearer token for API calls, if a session exists
pub fn token() -> Option<String> {
    read_key(TOKEN_KEY).filter(|token| !token.is_empty())
}

/// Logged-in user id; complaint endpoints are scoped by it
pub fn user_id() -> Option<String> {
    read_key(USER_ID_KEY).filter(|id| !id.is_empty())
}
