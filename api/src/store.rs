//! In-memory data layer behind the server functions.
//!
//! The catalog is seeded from an embedded JSON file so a fresh checkout
//! serves real-looking data; accounts and the signed-in flag live in
//! process memory. A database can replace this module without touching the
//! server function signatures.

use std::sync::{PoisonError, RwLock};

use dioxus::logger::tracing;
use once_cell::sync::Lazy;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::models::{Credentials, Listing, NewAccount, Session, User};
use crate::AuthError;

const LISTING_SEED: &str = include_str!("../seed/listings.json");

static CATALOG: Lazy<Vec<Listing>> = Lazy::new(|| match serde_json::from_str(LISTING_SEED) {
    Ok(listings) => listings,
    Err(err) => {
        tracing::error!("listing seed is unreadable: {err}");
        Vec::new()
    }
});

struct Account {
    user: User,
    password: String,
}

static ACCOUNTS: Lazy<RwLock<Vec<Account>>> = Lazy::new(|| RwLock::new(seed_accounts()));
static SIGNED_IN: Lazy<RwLock<Option<User>>> = Lazy::new(|| RwLock::new(None));

fn seed_accounts() -> Vec<Account> {
    vec![Account {
        user: User {
            id: "u-demo".into(),
            name: "Demi Harbor".into(),
            email: "demo@homeport.app".into(),
            created_at: "2023-03-14T09:30:00Z".into(),
        },
        password: "hostlife".into(),
    }]
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".into())
}

pub(crate) fn listings() -> Vec<Listing> {
    CATALOG.clone()
}

pub(crate) fn current_session() -> Session {
    let guard = SIGNED_IN.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(user) => Session::Authenticated { user: user.clone() },
        None => Session::Anonymous,
    }
}

pub(crate) fn sign_in(credentials: &Credentials) -> Result<Session, AuthError> {
    let accounts = ACCOUNTS.read().unwrap_or_else(PoisonError::into_inner);
    let account = accounts
        .iter()
        .find(|account| account.user.email == credentials.email)
        .filter(|account| account.password == credentials.password);

    match account {
        Some(account) => {
            let user = account.user.clone();
            tracing::info!(user = %user.id, "sign-in");
            *SIGNED_IN.write().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
            Ok(Session::Authenticated { user })
        }
        None => {
            tracing::warn!(email = %credentials.email, "sign-in rejected");
            Err(AuthError::BadCredentials)
        }
    }
}

pub(crate) fn register(account: NewAccount) -> Result<Session, AuthError> {
    let mut accounts = ACCOUNTS.write().unwrap_or_else(PoisonError::into_inner);
    if accounts
        .iter()
        .any(|existing| existing.user.email == account.email)
    {
        return Err(AuthError::EmailTaken(account.email));
    }

    let user = User {
        id: format!("u-{}", uuid::Uuid::new_v4()),
        name: account.name,
        email: account.email,
        created_at: now_rfc3339(),
    };
    tracing::info!(user = %user.id, "account created");

    accounts.push(Account {
        user: user.clone(),
        password: account.password,
    });
    *SIGNED_IN.write().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
    Ok(Session::Authenticated { user })
}

pub(crate) fn sign_out() {
    let mut guard = SIGNED_IN.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(user) = guard.take() {
        tracing::info!(user = %user.id, "sign-out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The signed-in flag is process-wide, so the whole auth lifecycle runs
    // inside one test to keep ordering deterministic.
    #[test]
    fn auth_lifecycle() {
        sign_out();
        assert_eq!(current_session(), Session::Anonymous);

        let wrong = Credentials {
            email: "demo@homeport.app".into(),
            password: "nope".into(),
        };
        assert!(matches!(sign_in(&wrong), Err(AuthError::BadCredentials)));
        assert_eq!(current_session(), Session::Anonymous);

        let good = Credentials {
            email: "demo@homeport.app".into(),
            password: "hostlife".into(),
        };
        let session = sign_in(&good).expect("seeded account signs in");
        assert!(session.is_authenticated());
        assert!(current_session().is_authenticated());

        let taken = register(NewAccount {
            name: "Demi Again".into(),
            email: "demo@homeport.app".into(),
            password: "whatever".into(),
        });
        assert!(matches!(taken, Err(AuthError::EmailTaken(_))));

        let fresh = register(NewAccount {
            name: "Nova Reyes".into(),
            email: "nova@example.com".into(),
            password: "sailaway".into(),
        })
        .expect("fresh email registers");
        assert_eq!(
            fresh.user().map(|u| u.email.as_str()),
            Some("nova@example.com")
        );

        sign_out();
        assert_eq!(current_session(), Session::Anonymous);
    }

    #[test]
    fn seeded_catalog_has_unique_ids() {
        let listings = listings();
        assert!(!listings.is_empty());

        let mut ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len(), "listing ids must be unique");
    }
}
