use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::PromiseError;

/// Creates a connected completion/promise pair.
pub fn channel<T, E>() -> (Completion<T, E>, Promise<T, E>) {
    let (sender, receiver) = oneshot::channel();
    (Completion { sender }, Promise { receiver })
}

/// The completion callback handed to a callback-style function.
///
/// Settling consumes the handle, so a promise settles at most once. The
/// handle is `Send` when `T` and `E` are, and may be completed from another
/// thread or task.
#[derive(Debug)]
pub struct Completion<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Completion<T, E> {
    /// Error-first callback: rejects with `err` if present, otherwise
    /// resolves with `result`.
    pub fn call(self, err: Option<E>, result: T) {
        match err {
            Some(e) => self.reject(e),
            None => self.resolve(result),
        }
    }

    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    pub fn reject(self, err: E) {
        self.settle(Err(err));
    }

    pub fn settle(self, outcome: Result<T, E>) {
        let ok = outcome.is_ok();
        if self.sender.send(outcome).is_err() {
            tracing::trace!(ok, "promise dropped before settling");
        } else {
            tracing::trace!(ok, "promise settled");
        }
    }

    /// Returns `true` once the promise side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// A pending result of a callback-style call.
///
/// Resolves to the value passed to [`Completion::resolve`], or to
/// [`PromiseError::Rejected`] / [`PromiseError::Abandoned`].
#[derive(Debug)]
#[must_use = "promises do nothing unless awaited"]
pub struct Promise<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Future for Promise<T, E> {
    type Output = Result<T, PromiseError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(err))) => Poll::Ready(Err(PromiseError::Rejected(err))),
            Poll::Ready(Err(_)) => {
                tracing::debug!("completion dropped without settling");
                Poll::Ready(Err(PromiseError::Abandoned))
            }
        }
    }
}
