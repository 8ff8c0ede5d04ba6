//! Sign-in gate in front of the calculators.
//!
//! The gate only decides whether calculators may be opened and which name to
//! greet. Identity never reaches a calculation.

use thiserror::Error;

/// What the calculators need to know about the current user.
pub trait Identity {
    fn is_authenticated(&self) -> bool;
    fn display_name(&self) -> &str;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("sign in to use the tax calculators")]
    Unauthenticated,
}

/// Returns the display name of a signed-in user.
///
/// # Errors
///
/// [`SessionError::Unauthenticated`] for an anonymous session.
pub fn require_session(identity: &dyn Identity) -> Result<String, SessionError> {
    if !identity.is_authenticated() {
        tracing::warn!("calculator access refused for anonymous session");
        return Err(SessionError::Unauthenticated);
    }
    Ok(identity.display_name().to_string())
}

/// An identity fixed at construction, e.g. from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StaticIdentity {
    #[default]
    Anonymous,
    SignedIn(String),
}

impl StaticIdentity {
    /// Signs in as `name`; a blank name stays anonymous.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => Self::SignedIn(name.to_string()),
            _ => Self::Anonymous,
        }
    }
}

impl Identity for StaticIdentity {
    fn is_authenticated(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Anonymous => "Guest",
            Self::SignedIn(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn signed_in_user_passes_gate() {
        let identity = StaticIdentity::from_name(Some("  Adaeze Okafor "));

        assert_eq!(require_session(&identity), Ok("Adaeze Okafor".to_string()));
    }

    #[test]
    fn anonymous_user_is_refused() {
        assert_eq!(
            require_session(&StaticIdentity::Anonymous),
            Err(SessionError::Unauthenticated)
        );
    }

    #[test]
    fn blank_name_stays_anonymous() {
        assert_eq!(StaticIdentity::from_name(Some("   ")), StaticIdentity::Anonymous);
        assert_eq!(StaticIdentity::from_name(None), StaticIdentity::Anonymous);
        assert_eq!(StaticIdentity::Anonymous.display_name(), "Guest");
    }
}
