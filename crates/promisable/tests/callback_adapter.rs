//! End-to-end tests wrapping callback-style APIs that complete on other
//! threads and tasks.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use promisable::*;

#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Text(String),
    Number(u64),
    Empty,
}

/// A client whose API reports results through completions, some of them
/// from a worker thread.
#[derive(Default)]
struct Client {
    requests: Mutex<Vec<Vec<Arg>>>,
}

impl Client {
    fn get_balance(&self, args: Vec<Arg>, done: Completion<u64, String>) {
        self.requests.lock().unwrap().push(args.clone());
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(5));
            match args.as_slice() {
                [Arg::Text(addr)] if addr.starts_with("41") => done.call(None, 42),
                _ => done.call(Some(format!("bad arguments: {args:?}")), 0),
            }
        });
    }

    fn forget(&self, _args: Vec<Arg>, done: Completion<u64, String>) {
        drop(done);
    }
}

impl Promisable for Client {}

#[tokio::test(flavor = "multi_thread")]
async fn resolves_from_worker_thread() {
    let client = Client::default();
    let balance = client
        .inject_promise(
            Client::get_balance,
            CallArgs::new(vec![Arg::Text("41abc".into())]),
        )
        .await;
    assert_eq!(balance, Ok(42));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejects_from_worker_thread() {
    let client = Client::default();
    let err = client
        .inject_promise(Client::get_balance, CallArgs::new(vec![Arg::Number(1)]))
        .await
        .unwrap_err();
    assert!(err.into_rejection().unwrap().contains("bad arguments"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_trailing_slot_is_excluded() {
    let client = Client::default();
    let balance = client
        .inject_promise(
            Client::get_balance,
            CallArgs::with_callback_slot(vec![Arg::Text("41abc".into()), Arg::Empty]),
        )
        .await;

    assert_eq!(balance, Ok(42));
    assert_eq!(
        client.requests.lock().unwrap()[0],
        vec![Arg::Text("41abc".into())]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn without_slot_everything_is_forwarded() {
    let client = Client::default();
    let result = client
        .inject_promise(
            Client::get_balance,
            CallArgs::new(vec![Arg::Text("41abc".into()), Arg::Empty]),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(client.requests.lock().unwrap()[0].len(), 2);
}

#[tokio::test]
async fn forgotten_completion_is_abandoned() {
    let client = Client::default();
    let result = client
        .inject_promise(Client::forget, CallArgs::default())
        .await;
    assert_eq!(result, Err(PromiseError::Abandoned));
}

#[tokio::test]
async fn shared_scope_across_tasks() {
    let injector = Arc::new(PromiseInjector::new(Mutex::new(0u64)));

    let mut handles = Vec::new();
    for i in 1..=4u64 {
        let injector = Arc::clone(&injector);
        handles.push(tokio::spawn(async move {
            injector
                .inject(
                    |counter: &Mutex<u64>, args: Vec<u64>, done: Completion<u64, String>| {
                        let mut counter = counter.lock().unwrap();
                        *counter += args[0];
                        done.resolve(*counter);
                    },
                    CallArgs::new(vec![i]),
                )
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(*injector.scope().lock().unwrap(), 10);
}

#[tokio::test]
async fn wraps_plain_functions() {
    fn lookup(args: Vec<&'static str>, done: Completion<usize, String>) {
        done.resolve(args.iter().map(|s| s.len()).sum());
    }

    let total = inject_promise_static(lookup, vec!["foo", "ba"]).await;
    assert_eq!(total, Ok(5));
}
