//! Recorder: a pass-through unit that logs its params.

use std::fmt::Display;
use std::sync::{Arc, Mutex};

use crate::unit::{FollowOn, Outcome, Wrappable};

/// A unit that appends its params (rendered with `Display`) to a shared
/// log, then invokes its follow-on with the same args and returns that
/// result unchanged.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of every entry recorded so far, in call order.
    pub fn entries(&self) -> Vec<String> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

impl<P, A, R> Wrappable<P, A, R> for Recorder
where
    P: Display,
{
    fn call(&self, params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        if let Ok(mut log) = self.log.lock() {
            log.push(params.to_string());
        }
        follow_on.invoke(args)
    }
}
