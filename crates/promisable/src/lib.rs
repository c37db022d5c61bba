//! Adapts callback-style functions into futures.
//!
//! A callback-style function takes its arguments plus a trailing
//! [`Completion`] and reports its outcome by calling it once. Wrapping such a
//! function with [`inject_promise_static`], [`PromiseInjector::inject`] or
//! [`Promisable::inject_promise`] yields a [`Promise`] that resolves or
//! rejects with that outcome.

pub mod args;
pub mod error;
pub mod injector;
pub mod promise;

pub use args::CallArgs;
pub use error::PromiseError;
pub use injector::{inject_promise_static, Promisable, PromiseInjector};
pub use promise::{channel, Completion, Promise};
