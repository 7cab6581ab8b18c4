//! Request session data used to build the initial user context.

use std::collections::BTreeMap;
use std::net::IpAddr;

use sentry::protocol::{IpAddress, User, Value};

/// A snapshot of the host framework's request session.
///
/// The host constructs one of these per request from whatever session
/// machinery it has and attaches it to the reporter.  Everything in it
/// becomes part of the user context attached to server-side events: the
/// arbitrary session entries, the session id and the remote address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionInfo {
    /// The session identifier.
    pub id: String,
    /// The remote address of the requesting client.
    pub remote_addr: Option<IpAddr>,
    /// Arbitrary session key-values to attach to the user.
    pub data: BTreeMap<String, Value>,
}

impl SessionInfo {
    /// Creates a session snapshot with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        SessionInfo {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Attaches the remote address of the client.
    pub fn with_remote_addr(mut self, addr: IpAddr) -> Self {
        self.remote_addr = Some(addr);
        self
    }

    /// Attaches a session entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Writes the session payload onto a user, overwriting whatever the
    /// user already carries for the same keys.
    pub(crate) fn apply(&self, user: &mut User) {
        for (key, value) in &self.data {
            set_user_field(user, key, value.clone());
        }
        user.other
            .insert("session_id".into(), self.id.clone().into());
        if let Some(addr) = self.remote_addr {
            user.ip_address = Some(IpAddress::Exact(addr));
        }
    }
}

/// Assigns a context entry to a user, routing the well-known keys into
/// the typed fields and everything else into `other`.
pub(crate) fn set_user_field(user: &mut User, key: &str, value: Value) {
    match (key, value.as_str()) {
        ("id", Some(s)) => user.id = Some(s.to_owned()),
        ("email", Some(s)) => user.email = Some(s.to_owned()),
        ("username", Some(s)) => user.username = Some(s.to_owned()),
        ("ip_address", Some(s)) => match s.parse::<IpAddr>() {
            Ok(addr) => user.ip_address = Some(IpAddress::Exact(addr)),
            Err(_) => {
                user.other.insert(key.to_owned(), value);
            }
        },
        _ => {
            user.other.insert(key.to_owned(), value);
        }
    }
}
