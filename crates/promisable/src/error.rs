use thiserror::Error;

/// Outcome of a [`Promise`](crate::Promise) that did not resolve.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromiseError<E> {
    /// The wrapped function reported an error through its completion.
    #[error("promise rejected: {0}")]
    Rejected(E),

    /// The completion was dropped without being called.
    #[error("completion dropped without settling")]
    Abandoned,
}

impl<E> PromiseError<E> {
    /// Returns the rejection value, if any.
    pub fn into_rejection(self) -> Option<E> {
        match self {
            PromiseError::Rejected(e) => Some(e),
            PromiseError::Abandoned => None,
        }
    }
}
