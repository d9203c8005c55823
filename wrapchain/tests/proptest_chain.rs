//! Property-based tests: ordering and chaining laws.

use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wrapchain::*;

/// Records its index when invoked, then continues.
struct OrderUnit {
    log: Arc<Mutex<Vec<usize>>>,
}

impl Wrappable<usize, (), ()> for OrderUnit {
    fn call(&self, index: &usize, args: (), follow_on: FollowOn<'_, usize, (), ()>) -> Outcome<()> {
        self.log.lock().unwrap().push(*index);
        follow_on.invoke(args)
    }
}

struct Terminal;

impl Wrappable<(), i64, i64> for Terminal {
    fn call(&self, _params: &(), args: i64, _follow_on: FollowOn<'_, (), i64, i64>) -> Outcome<i64> {
        Ok(Some(args))
    }
}

struct PassThrough;

impl Wrappable<(), i64, i64> for PassThrough {
    fn call(&self, _params: &(), args: i64, follow_on: FollowOn<'_, (), i64, i64>) -> Outcome<i64> {
        follow_on.invoke(args)
    }
}

struct Counted(Arc<AtomicUsize>);

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

proptest! {
    #[test]
    fn wrap_top_reverses_insertion_order(n in 1usize..32) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut chain: Chain<usize, (), ()> = Chain::new();
        for i in 0..n {
            chain = chain.wrap_top(OrderUnit { log: log.clone() }, i);
        }

        chain.invoke(()).unwrap();

        let expected: Vec<usize> = (0..n).rev().collect();
        prop_assert_eq!(chain.params().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(log.lock().unwrap().clone(), expected);
    }

    #[test]
    fn wrap_bottom_keeps_insertion_order(n in 1usize..32) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut chain: Chain<usize, (), ()> =
            Chain::new().wrap_top(OrderUnit { log: log.clone() }, 0);
        for i in 1..n {
            chain.wrap_bottom(OrderUnit { log: log.clone() }, i).unwrap();
        }

        chain.invoke(()).unwrap();

        let expected: Vec<usize> = (0..n).collect();
        prop_assert_eq!(chain.params().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(log.lock().unwrap().clone(), expected);
    }

    #[test]
    fn pass_through_law(depth in 1usize..64, value in any::<i64>()) {
        let mut chain: Chain<(), i64, i64> = Chain::new().wrap_top(Terminal, ());
        for _ in 0..depth {
            chain = chain.wrap_top(PassThrough, ());
        }
        prop_assert_eq!(chain.invoke(value).unwrap(), Some(value));
    }

    #[test]
    fn release_all_counts_every_unit(n in 0usize..64) {
        let released = Arc::new(AtomicUsize::new(0));
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut chain: Chain<Counted, (), ()> = Chain::new();
        for _ in 0..n {
            chain = chain.wrap_top(
                wrap_fn({
                    let log = log.clone();
                    move |_: &Counted, args: (), next| {
                        log.lock().unwrap().push(());
                        next.invoke(args)
                    }
                }),
                Counted(released.clone()),
            );
        }

        prop_assert_eq!(chain.release_all(), n);
        prop_assert_eq!(released.load(Ordering::SeqCst), n);
        prop_assert!(log.lock().unwrap().is_empty());
    }
}
