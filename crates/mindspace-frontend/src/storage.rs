//! Browser-local persistence for the signed-in user.
//!
//! A single localStorage slot holds the user record; it is read once at
//! mount and cleared on sign-out.

use gloo_storage::{LocalStorage, Storage};
use mindspace_core::{Error, Result, User};

pub fn load_user(key: &str) -> Option<User> {
    LocalStorage::get(key).ok()
}

pub fn save_user(key: &str, user: &User) -> Result<()> {
    LocalStorage::set(key, user).map_err(|e| Error::Storage(e.to_string()))
}

pub fn clear_user(key: &str) {
    LocalStorage::delete(key);
}
