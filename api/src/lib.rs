//! Shared server functions for every Homeport front end.
//!
//! The UI only ever talks to these signatures; the in-memory store behind
//! them (see `store`) stands in for the real data and auth services.

use dioxus::prelude::*;

mod models;
pub use models::{Credentials, Listing, NewAccount, Session, User};

#[cfg(feature = "server")]
mod store;

/// Errors the account flows can surface to a caller.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no account matches that email and password")]
    BadCredentials,
    #[error("an account already exists for {0}")]
    EmailTaken(String),
}

/// The full catalog, in the order the data layer keeps it.
#[server]
pub async fn get_listings() -> Result<Vec<Listing>, ServerFnError> {
    Ok(store::listings())
}

/// Session attached to the current request.
#[server]
pub async fn get_current_user() -> Result<Session, ServerFnError> {
    Ok(store::current_session())
}

#[server]
pub async fn sign_in(credentials: Credentials) -> Result<Session, ServerFnError> {
    store::sign_in(&credentials).map_err(|err| ServerFnError::new(err.to_string()))
}

#[server]
pub async fn register(account: NewAccount) -> Result<Session, ServerFnError> {
    store::register(account).map_err(|err| ServerFnError::new(err.to_string()))
}

/// Ends the session. Idempotent; signing out while anonymous is a no-op.
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    store::sign_out();
    Ok(())
}
