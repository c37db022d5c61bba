use crate::args::CallArgs;
use crate::promise::{self, Completion, Promise};

/// Invokes a callback-style function and returns its result as a promise.
///
/// `func` runs immediately on the calling thread with `args` and a fresh
/// [`Completion`]. A panic inside `func` propagates to the caller; it is not
/// turned into a rejection.
pub fn inject_promise_static<A, T, E, F>(func: F, args: Vec<A>) -> Promise<T, E>
where
    F: FnOnce(Vec<A>, Completion<T, E>),
{
    let (completion, promise) = promise::channel();
    tracing::trace!(args = args.len(), "invoking callback-style function");
    func(args, completion);
    promise
}

fn inject_scoped<S, A, T, E, F>(scope: &S, func: F, args: CallArgs<A>) -> Promise<T, E>
where
    S: ?Sized,
    F: FnOnce(&S, Vec<A>, Completion<T, E>),
{
    let dropped_slot = args.has_trailing_callback_slot() && !args.is_empty();
    let forwarded = args.forwarded();
    tracing::trace!(
        forwarded = forwarded.len(),
        dropped_slot,
        "forwarding call arguments"
    );
    inject_promise_static(move |args, completion| func(scope, args, completion), forwarded)
}

/// Binds callback-style functions to a fixed receiver.
///
/// Every call made through [`PromiseInjector::inject`] receives `&scope` as
/// its first argument.
#[derive(Debug, Clone, Default)]
pub struct PromiseInjector<S> {
    scope: S,
}

impl<S> PromiseInjector<S> {
    pub fn new(scope: S) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    pub fn into_scope(self) -> S {
        self.scope
    }

    /// Calls `func(&scope, forwarded, completion)` exactly once.
    ///
    /// When `args` carries a trailing callback slot its last entry is not
    /// forwarded.
    pub fn inject<A, T, E, F>(&self, func: F, args: CallArgs<A>) -> Promise<T, E>
    where
        F: FnOnce(&S, Vec<A>, Completion<T, E>),
    {
        inject_scoped(&self.scope, func, args)
    }
}

/// Gives a type an `inject_promise` method bound to itself.
///
/// ```
/// use promisable::{CallArgs, Completion, Promisable};
///
/// struct Node {
///     height: u64,
/// }
///
/// impl Node {
///     fn block_at(&self, args: Vec<u64>, done: Completion<u64, String>) {
///         match args.first() {
///             Some(&n) if n <= self.height => done.resolve(n),
///             _ => done.reject("block not found".into()),
///         }
///     }
/// }
///
/// impl Promisable for Node {}
///
/// # block_on(async {
/// let node = Node { height: 10 };
/// let promise = node.inject_promise(Node::block_at, CallArgs::new(vec![7]));
/// assert_eq!(promise.await, Ok(7));
/// # });
/// # fn block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub trait Promisable {
    fn inject_promise<A, T, E, F>(&self, func: F, args: CallArgs<A>) -> Promise<T, E>
    where
        F: FnOnce(&Self, Vec<A>, Completion<T, E>),
    {
        inject_scoped(self, func, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromiseError;

    #[derive(Default)]
    struct Recorder {
        calls: std::cell::RefCell<Vec<Vec<i32>>>,
    }

    impl Recorder {
        fn sum(&self, args: Vec<i32>, done: Completion<i32, String>) {
            self.calls.borrow_mut().push(args.clone());
            done.call(None, args.iter().sum());
        }
    }

    impl Promisable for Recorder {}

    #[tokio::test]
    async fn static_resolves() {
        let promise = inject_promise_static(
            |args: Vec<i32>, done: Completion<i32, String>| done.call(None, args[0] * 2),
            vec![21],
        );
        assert_eq!(promise.await, Ok(42));
    }

    #[tokio::test]
    async fn static_rejects() {
        let promise = inject_promise_static(
            |_args: Vec<i32>, done: Completion<i32, &str>| done.call(Some("x"), 0),
            vec![],
        );
        assert_eq!(promise.await, Err(PromiseError::Rejected("x")));
    }

    #[tokio::test]
    async fn injector_binds_scope() {
        let injector = PromiseInjector::new(Recorder::default());
        let result = injector
            .inject(Recorder::sum, CallArgs::new(vec![1, 2, 3]))
            .await;

        assert_eq!(result, Ok(6));
        assert_eq!(*injector.scope().calls.borrow(), vec![vec![1, 2, 3]]);
    }

    #[tokio::test]
    async fn callback_slot_is_not_forwarded() {
        let injector = PromiseInjector::new(Recorder::default());
        let result = injector
            .inject(Recorder::sum, CallArgs::with_callback_slot(vec![1, 2, 100]))
            .await;

        assert_eq!(result, Ok(3));
        assert_eq!(*injector.scope().calls.borrow(), vec![vec![1, 2]]);
    }

    #[tokio::test]
    async fn promisable_uses_self_as_scope() {
        let recorder = Recorder::default();
        let first = recorder.inject_promise(Recorder::sum, CallArgs::new(vec![4]));
        let second = recorder.inject_promise(Recorder::sum, CallArgs::with_callback_slot(vec![5, 0]));

        assert_eq!(first.await, Ok(4));
        assert_eq!(second.await, Ok(5));
        assert_eq!(recorder.calls.borrow().len(), 2);
    }

    #[test]
    fn function_runs_before_await() {
        let recorder = Recorder::default();
        let _promise = recorder.inject_promise(Recorder::sum, CallArgs::new(vec![1]));
        assert_eq!(recorder.calls.borrow().len(), 1);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn synchronous_panic_escapes() {
        let injector = PromiseInjector::new(());
        let _promise = injector.inject(
            |_: &(), _args: Vec<i32>, _done: Completion<i32, String>| panic!("boom"),
            CallArgs::default(),
        );
    }
}
