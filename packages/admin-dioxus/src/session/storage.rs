//! Durable session persistence.
//!
//! Two localStorage keys, written together and read together: the bearer
//! token and the serialized user record. A half-present or unparseable pair
//! is treated as no session and removed.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use newsroom_api::types::User;

const TOKEN_KEY: &str = "newsroom_token";
const USER_KEY: &str = "newsroom_user";

pub fn load_session() -> Option<(String, User)> {
    let token = LocalStorage::get::<String>(TOKEN_KEY);
    let user = LocalStorage::get::<User>(USER_KEY);
    match (token, user) {
        (Ok(token), Ok(user)) => Some((token, user)),
        (Err(StorageError::KeyNotFound(_)), Err(StorageError::KeyNotFound(_))) => None,
        _ => {
            tracing::warn!("incomplete or corrupt session in storage; clearing");
            clear_session();
            None
        }
    }
}

pub fn save_session(token: &str, user: &User) {
    let token_ok = LocalStorage::set(TOKEN_KEY, token).is_ok();
    let user_ok = LocalStorage::set(USER_KEY, user).is_ok();
    if !token_ok || !user_ok {
        // never leave one key without the other
        tracing::warn!("failed to persist session; clearing both keys");
        clear_session();
    }
}

/// Rewrite only the user record, e.g. after a profile edit.
pub fn save_user(user: &User) {
    if LocalStorage::set(USER_KEY, user).is_err() {
        tracing::warn!("failed to persist updated user record");
    }
}

pub fn clear_session() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}
