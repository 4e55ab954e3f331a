use std::{borrow::Borrow, fmt};

/// Opaque identifier of a session user.
///
/// Assigned by the auth provider when an anonymous session is created
/// and stable for the lifetime of that session.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for UserId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for UserId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<UserId> for String {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}
