//! Remote endpoint identity.

use std::fmt;

use zeroize::Zeroizing;

/// Identity a remote [`FileAccess`](crate::FileAccess) provider
/// authenticates with.
///
/// The workspace ships no transport of its own; this type exists so
/// out-of-tree providers and their callers agree on one credential shape.
/// The password is held in zeroizing memory and wiped when the endpoint is
/// dropped. `Debug` output redacts it unconditionally.
#[derive(Clone)]
pub struct Endpoint {
    host: String,
    username: String,
    password: Zeroizing<String>,
}

impl Endpoint {
    /// Creates an endpoint identity from its three credential parts.
    #[must_use]
    pub fn new<H, U, P>(host: H, username: U, password: P) -> Self
    where
        H: Into<String>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            host: host.into(),
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Returns the host to connect to.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the username to authenticate as.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// Callers must not persist or log the returned slice; the backing
    /// storage is zeroized when the endpoint drops.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.host)
    }
}
