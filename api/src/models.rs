//! Records exchanged between the server functions and the front ends.

use serde::{Deserialize, Serialize};

/// An account record as the UI sees it. Passwords never leave the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// RFC 3339 timestamp of account creation.
    pub created_at: String,
}

/// Authentication state attached to the current request.
///
/// Deliberately a two-variant union instead of `Option<User>`: rendering
/// code has to branch exhaustively, and "anonymous" is a first-class state
/// rather than an absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Session {
    Anonymous,
    Authenticated { user: User },
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user } => Some(user),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::Anonymous
    }
}

/// A marketplace stay. `id` is the rendering key and must be unique within
/// a catalog; ordering is owned by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub host_id: String,
    pub title: String,
    pub city: String,
    pub country: String,
    pub category: String,
    pub nightly_price_cents: u32,
    pub max_guests: u8,
    /// RFC 3339 timestamp of when the listing went live.
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}
