//! Authentication realms
//!
//! Learner and admin sessions share one lifecycle and differ only in their
//! routes, storage key and identity record.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::api::{AdminProfile, Endpoint, UserProfile};

/// One independent authentication domain
pub trait Realm: 'static {
    /// Identity record returned by login and by the identity route
    type Identity: DeserializeOwned + Serialize + Clone + fmt::Debug + PartialEq + 'static;

    /// Human-readable realm name, used in logs
    const NAME: &'static str;

    /// Fixed storage key for the persisted bearer token
    const TOKEN_KEY: &'static str;

    fn login_endpoint() -> Endpoint;

    fn identity_endpoint() -> Endpoint;

    /// Name to greet the identity with
    fn display_name(identity: &Self::Identity) -> &str;
}

/// Learner accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRealm;

impl Realm for UserRealm {
    type Identity = UserProfile;

    const NAME: &'static str = "user";
    const TOKEN_KEY: &'static str = "token";

    fn login_endpoint() -> Endpoint {
        Endpoint::Login
    }

    fn identity_endpoint() -> Endpoint {
        Endpoint::Me
    }

    fn display_name(identity: &UserProfile) -> &str {
        if identity.name.is_empty() {
            &identity.email
        } else {
            &identity.name
        }
    }
}

/// Administrator accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminRealm;

impl Realm for AdminRealm {
    type Identity = AdminProfile;

    const NAME: &'static str = "admin";
    const TOKEN_KEY: &'static str = "adminToken";

    fn login_endpoint() -> Endpoint {
        Endpoint::AdminLogin
    }

    fn identity_endpoint() -> Endpoint {
        Endpoint::AdminMe
    }

    fn display_name(identity: &AdminProfile) -> &str {
        if identity.name.is_empty() {
            &identity.email
        } else {
            &identity.name
        }
    }
}
