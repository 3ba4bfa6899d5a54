//! Session state

/// Identity and bearer credential for one realm.
///
/// A session is authenticated exactly when an identity is present. A token
/// without an identity is a persisted credential awaiting revalidation.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<I> {
    token: Option<String>,
    identity: Option<I>,
}

impl<I> Default for Session<I> {
    fn default() -> Self {
        Self {
            token: None,
            identity: None,
        }
    }
}

impl<I> Session<I> {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session rebuilt from a persisted token, not yet revalidated
    pub fn restored(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            identity: None,
        }
    }

    pub fn established(token: impl Into<String>, identity: I) -> Self {
        Self {
            token: Some(token.into()),
            identity: Some(identity),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// A token is held but no identity has been confirmed for it
    pub fn is_pending(&self) -> bool {
        self.token.is_some() && self.identity.is_none()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn identity(&self) -> Option<&I> {
        self.identity.as_ref()
    }

    /// Attach a confirmed identity to the held token
    pub fn confirm(&mut self, identity: I) {
        self.identity = Some(identity);
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.identity = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_is_derived_from_identity() {
        let mut session: Session<&str> = Session::restored("tok");
        assert!(!session.is_authenticated());
        assert!(session.is_pending());

        session.confirm("ada");
        assert!(session.is_authenticated());
        assert!(!session.is_pending());

        session.clear();
        assert_eq!(session, Session::anonymous());
    }
}
