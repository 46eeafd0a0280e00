// src/group/members.rs

/// Membership predicate over check names. Pure and stateless, so any
/// number of callers may test concurrently.
pub struct Members(Box<dyn Fn(&str) -> bool + Send + Sync>);

impl Members {
    /// Every check is a member. Used by the primary group.
    pub fn all() -> Self {
        Self(Box::new(|_| true))
    }

    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self(Box::new(predicate))
    }

    /// Include/exclude membership: a name is in when the include list is
    /// empty, contains "*", or contains the name exactly, and the exclude
    /// list does not contain it. Exclusion wins.
    pub fn include_exclude<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let include: Vec<String> = include.into_iter().map(Into::into).collect();
        let exclude: Vec<String> = exclude.into_iter().map(Into::into).collect();
        Self::from_fn(move |name| {
            if exclude.iter().any(|e| e == name) {
                return false;
            }
            include.is_empty()
                || include.iter().any(|i| i == "*")
                || include.iter().any(|i| i == name)
        })
    }

    pub fn test(&self, name: &str) -> bool {
        (self.0)(name)
    }
}
