//! The chain: construction, invocation, and teardown.

use std::fmt;

use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::unit::{FollowOn, Outcome, Unit, Wrappable};

/// An ordered chain of wrapped functions, owned through its head unit.
///
/// Built with [`wrap_top`](Chain::wrap_top) and
/// [`wrap_bottom`](Chain::wrap_bottom), run with [`invoke`](Chain::invoke),
/// and torn down with [`release_all`](Chain::release_all) or by dropping it.
///
/// Every unit owns its successor, so a unit can only ever belong to one
/// chain and teardown can never release a unit twice.
pub struct Chain<P, A, R> {
    head: Option<Box<Unit<P, A, R>>>,
    config: ChainConfig,
}

impl<P, A, R> Chain<P, A, R> {
    /// Create an empty chain with the default config.
    pub fn new() -> Self {
        Self::with_config(ChainConfig::default())
    }

    /// Create an empty chain with the given config.
    pub fn with_config(config: ChainConfig) -> Self {
        Self { head: None, config }
    }

    /// The config this chain was created with.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Whether the chain has no units.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of units, counted head to tail.
    pub fn len(&self) -> usize {
        self.params().count()
    }

    /// The params of every unit, head to tail.
    pub fn params(&self) -> impl Iterator<Item = &P> {
        std::iter::successors(self.head.as_deref(), |unit| unit.next.as_deref())
            .map(|unit| &unit.params)
    }

    /// Add a new superior unit in front of the chain.
    ///
    /// The new unit becomes the head and the existing chain (possibly empty)
    /// becomes its follow-on.
    #[must_use]
    pub fn wrap_top<W>(mut self, callable: W, params: P) -> Self
    where
        W: Wrappable<P, A, R> + 'static,
    {
        let follow_on = self.head.take();
        self.head = Some(Box::new(Unit::new(Box::new(callable), params, follow_on)));
        tracing::debug!(chain = self.config.label(), "wrapped new top unit");
        self
    }

    /// Add a new subordinate unit after the current tail.
    ///
    /// The head does not move. Fails with [`ChainError::EmptyChain`] when
    /// there is no tail to append after; use [`wrap_top`](Chain::wrap_top)
    /// to start a chain.
    pub fn wrap_bottom<W>(&mut self, callable: W, params: P) -> Result<&mut Self, ChainError>
    where
        W: Wrappable<P, A, R> + 'static,
    {
        if self.head.is_none() {
            tracing::debug!(chain = self.config.label(), "wrap_bottom on empty chain");
            return Err(ChainError::EmptyChain);
        }

        let mut depth = 0;
        let mut slot = &mut self.head;
        while let Some(unit) = slot {
            slot = &mut unit.next;
            depth += 1;
        }
        *slot = Some(Box::new(Unit::new(Box::new(callable), params, None)));

        tracing::debug!(chain = self.config.label(), depth, "wrapped new bottom unit");
        Ok(self)
    }

    /// A follow-on handle to the head of the chain, at depth zero.
    pub fn follow_on(&self) -> FollowOn<'_, P, A, R> {
        FollowOn::new(self.head.as_deref(), 0, &self.config)
    }

    /// Invoke the head unit with `args`.
    ///
    /// An empty chain returns `Ok(None)` without running anything. Otherwise
    /// the head callable's outcome is returned unchanged, errors included.
    pub fn invoke(&self, args: A) -> Outcome<R> {
        self.follow_on().invoke(args)
    }

    /// Release every unit, head to tail, and return how many were released.
    ///
    /// Each unit's callable is dropped first, then its params, then the unit
    /// itself. The chain is consumed, so it cannot be used afterwards.
    pub fn release_all(mut self) -> usize {
        let released = release(self.head.take());
        tracing::debug!(chain = self.config.label(), released, "released chain");
        released
    }
}

/// Walk the chain iteratively so long chains never recurse in `Drop`.
fn release<P, A, R>(mut cursor: Option<Box<Unit<P, A, R>>>) -> usize {
    let mut released = 0;
    while let Some(unit) = cursor {
        let Unit {
            callable,
            params,
            next,
        } = *unit;
        cursor = next;
        drop(callable);
        drop(params);
        released += 1;
    }
    released
}

impl<P, A, R> Drop for Chain<P, A, R> {
    fn drop(&mut self) {
        release(self.head.take());
    }
}

impl<P, A, R> Default for Chain<P, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, A, R> fmt::Debug for Chain<P, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
