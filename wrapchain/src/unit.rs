//! Units, callables, and the follow-on handle passed between them.
//!
//! The pattern is the same as an axum `from_fn` middleware stack: each
//! callable receives a [`FollowOn`] it can invoke to continue the chain,
//! or drop to short-circuit.

use std::sync::Arc;

use crate::config::ChainConfig;
use crate::error::ChainError;

/// What invoking a unit produces.
///
/// `Ok(None)` is the empty result returned when a chain runs out of units.
pub type Outcome<R> = Result<Option<R>, ChainError>;

/// A callable that can be wrapped into a [`Chain`](crate::Chain).
///
/// Each invocation receives:
/// - `params`: the payload stored alongside this callable in its unit
/// - `args`: whatever the caller (usually the superior unit) passed in
/// - `follow_on`: the rest of the chain
///
/// The callable may invoke `follow_on` zero or more times, rewrite args on
/// the way down, rewrite the result on the way up, or ignore it entirely.
pub trait Wrappable<P, A, R> {
    /// Run this callable.
    fn call(&self, params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R>;
}

impl<P, A, R, W> Wrappable<P, A, R> for Box<W>
where
    W: Wrappable<P, A, R> + ?Sized,
{
    fn call(&self, params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        (**self).call(params, args, follow_on)
    }
}

impl<P, A, R, W> Wrappable<P, A, R> for Arc<W>
where
    W: Wrappable<P, A, R> + ?Sized,
{
    fn call(&self, params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        (**self).call(params, args, follow_on)
    }
}

/// One link in a chain. Owns its callable, its params, and its successor.
pub(crate) struct Unit<P, A, R> {
    pub(crate) callable: Box<dyn Wrappable<P, A, R>>,
    pub(crate) params: P,
    pub(crate) next: Option<Box<Unit<P, A, R>>>,
}

impl<P, A, R> Unit<P, A, R> {
    pub(crate) fn new(
        callable: Box<dyn Wrappable<P, A, R>>,
        params: P,
        next: Option<Box<Unit<P, A, R>>>,
    ) -> Self {
        Self {
            callable,
            params,
            next,
        }
    }
}

/// The remainder of a chain, as seen from inside a callable.
///
/// A borrowed, copyable handle: invoking it does not consume it, so a
/// callable may retry its follow-on. It cannot outlive the chain.
pub struct FollowOn<'a, P, A, R> {
    unit: Option<&'a Unit<P, A, R>>,
    depth: usize,
    config: &'a ChainConfig,
}

impl<P, A, R> Clone for FollowOn<'_, P, A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, A, R> Copy for FollowOn<'_, P, A, R> {}

impl<'a, P, A, R> FollowOn<'a, P, A, R> {
    pub(crate) fn new(
        unit: Option<&'a Unit<P, A, R>>,
        depth: usize,
        config: &'a ChainConfig,
    ) -> Self {
        Self {
            unit,
            depth,
            config,
        }
    }

    /// Invoke the first unit of this follow-on with `args`.
    ///
    /// Returns `Ok(None)` without running anything when the follow-on is
    /// empty. Otherwise returns exactly what the unit's callable returns.
    pub fn invoke(&self, args: A) -> Outcome<R> {
        let Some(unit) = self.unit else {
            tracing::trace!(chain = self.config.label(), depth = self.depth, "end of chain");
            return Ok(None);
        };

        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                tracing::warn!(chain = self.config.label(), limit, "chain depth limit reached");
                return Err(ChainError::TooDeep { limit });
            }
        }

        tracing::trace!(chain = self.config.label(), depth = self.depth, "invoking unit");
        let next = FollowOn::new(unit.next.as_deref(), self.depth + 1, self.config);
        unit.callable.call(&unit.params, args, next)
    }

    /// Whether there is nothing left to invoke.
    pub fn is_empty(&self) -> bool {
        self.unit.is_none()
    }

    /// Zero-based position of the next unit in the chain.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// A closure adapted into a [`Wrappable`]. Built by [`wrap_fn`].
pub struct WrapFn<F> {
    f: F,
}

impl<P, A, R, F> Wrappable<P, A, R> for WrapFn<F>
where
    F: for<'a> Fn(&'a P, A, FollowOn<'a, P, A, R>) -> Outcome<R>,
{
    fn call(&self, params: &P, args: A, follow_on: FollowOn<'_, P, A, R>) -> Outcome<R> {
        (self.f)(params, args, follow_on)
    }
}

/// Create a callable from a closure.
///
/// # Example
///
/// ```
/// use wrapchain::{Chain, wrap_fn};
///
/// let chain: Chain<(), String, usize> = Chain::new()
///     .wrap_top(wrap_fn(|_: &(), args: String, _next| Ok(Some(args.len()))), ());
///
/// assert_eq!(chain.invoke("hello".into()).unwrap(), Some(5));
/// ```
#[must_use]
pub fn wrap_fn<P, A, R, F>(f: F) -> WrapFn<F>
where
    F: for<'a> Fn(&'a P, A, FollowOn<'a, P, A, R>) -> Outcome<R>,
{
    WrapFn { f }
}
