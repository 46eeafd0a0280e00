// src/security/mod.rs
use std::collections::HashSet;

/// Caller identity as seen by the disclosure policy: an optional principal
/// plus a role-membership query. Produced per request by whatever
/// authentication layer fronts the endpoint; groups never store one.
pub struct SecurityContext {
    principal: Option<String>,
    role_check: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl std::fmt::Debug for SecurityContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityContext")
            .field("principal", &self.principal)
            .finish_non_exhaustive()
    }
}

impl SecurityContext {
    /// Context for an unauthenticated caller. Every role query is false.
    pub fn anonymous() -> Self {
        Self {
            principal: None,
            role_check: Box::new(|_| false),
        }
    }

    pub fn authenticated<F>(principal: impl Into<String>, role_check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            principal: Some(principal.into()),
            role_check: Box::new(role_check),
        }
    }

    /// Convenience constructor backed by a fixed role set.
    pub fn with_roles<I>(principal: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let roles: HashSet<String> = roles.into_iter().map(Into::into).collect();
        Self::authenticated(principal, move |role| roles.contains(role))
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    pub fn is_user_in_role(&self, role: &str) -> bool {
        (self.role_check)(role)
    }
}
