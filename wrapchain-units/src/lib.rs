#![deny(missing_docs)]
//! Built-in units for wrapchain.
//!
//! Each unit here is generic over the chain's params type and ignores its
//! own params, so it can be dropped into any chain whose args and results
//! fit. Compose them with [`Chain::wrap_top`](wrapchain::Chain::wrap_top)
//! and [`Chain::wrap_bottom`](wrapchain::Chain::wrap_bottom).
//!
//! | Unit | Continues? | What it does |
//! |------|-----------|-------------|
//! | [`Traced`] | always | Span + timing around the follow-on |
//! | [`Retry`] | 1..=n times | Re-invokes the follow-on on error |
//! | [`Guard`] | when allowed | Rejects args failing a predicate |
//! | [`MapArgs`] | always | Rewrites args on the way down |
//! | [`Constant`] | never | Terminal unit returning a fixed value |

use std::time::Instant;

use wrapchain::{ChainError, FollowOn, Outcome, Wrappable};

/// Emits a `tracing` span around the rest of the chain and logs how long it
/// took and how it ended.
#[derive(Debug, Clone)]
pub struct Traced {
    name: String,
}

impl Traced {
    /// Create a traced unit; `name` is recorded on the span.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<P, A, R> Wrappable<P, A, R> for Traced {
    fn call(&self, _params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        let span = tracing::debug_span!(
            "wrapchain.unit",
            unit = %self.name,
            depth = follow_on.depth().saturating_sub(1)
        );
        let _entered = span.enter();

        let started = Instant::now();
        let outcome = follow_on.invoke(args);
        let elapsed_us = started.elapsed().as_micros() as u64;

        match &outcome {
            Ok(Some(_)) => tracing::debug!(elapsed_us, "follow-on completed"),
            Ok(None) => tracing::debug!(elapsed_us, "follow-on returned empty result"),
            Err(e) => tracing::warn!(elapsed_us, error = %e, "follow-on failed"),
        }
        outcome
    }
}

/// Re-invokes the follow-on with a clone of the args until it succeeds.
///
/// Runs the follow-on once, then up to `max_retries` more times while it
/// keeps failing. The last outcome is returned. A tripped depth guard is
/// returned immediately since retrying cannot change it.
#[derive(Debug, Clone, Copy)]
pub struct Retry {
    max_retries: u32,
}

impl Retry {
    /// Create a retry unit allowing `max_retries` additional attempts.
    #[must_use]
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }
}

impl Default for Retry {
    fn default() -> Self {
        Self::new(3)
    }
}

impl<P, A, R> Wrappable<P, A, R> for Retry
where
    A: Clone,
{
    fn call(&self, _params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        let mut attempt = 0;
        loop {
            let outcome = follow_on.invoke(args.clone());
            match outcome {
                Err(ref e)
                    if attempt < self.max_retries
                        && !matches!(e, ChainError::TooDeep { .. }) =>
                {
                    attempt += 1;
                    tracing::debug!(attempt, max_retries = self.max_retries, error = %e, "retrying follow-on");
                }
                other => return other,
            }
        }
    }
}

/// Terminal unit: returns a clone of its value and never continues.
#[derive(Debug, Clone)]
pub struct Constant<R> {
    value: R,
}

impl<R> Constant<R> {
    /// Create a terminal unit returning `value`.
    #[must_use]
    pub fn new(value: R) -> Self {
        Self { value }
    }
}

impl<P, A, R> Wrappable<P, A, R> for Constant<R>
where
    R: Clone,
{
    fn call(&self, _params: &P, _args: A, _follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        Ok(Some(self.value.clone()))
    }
}

/// Rewrites the args before handing them to the follow-on.
pub struct MapArgs<F> {
    f: F,
}

impl<F> MapArgs<F> {
    /// Create a unit applying `f` to every args value passing through.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<P, A, R, F> Wrappable<P, A, R> for MapArgs<F>
where
    F: Fn(A) -> A,
{
    fn call(&self, _params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        follow_on.invoke((self.f)(args))
    }
}

/// Continues only when the predicate accepts the args.
///
/// Rejected args short-circuit the chain with [`ChainError::Failed`]
/// carrying the configured reason.
pub struct Guard<F> {
    allow: F,
    reason: String,
}

impl<F> Guard<F> {
    /// Create a guard; `reason` is reported when `allow` returns false.
    #[must_use]
    pub fn new(allow: F, reason: impl Into<String>) -> Self {
        Self {
            allow,
            reason: reason.into(),
        }
    }
}

impl<P, A, R, F> Wrappable<P, A, R> for Guard<F>
where
    F: Fn(&A) -> bool,
{
    fn call(&self, _params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        if (self.allow)(&args) {
            follow_on.invoke(args)
        } else {
            tracing::debug!(reason = %self.reason, "guard rejected args");
            Err(ChainError::Failed(self.reason.clone()))
        }
    }
}
