//! # wrapchain: runtime-composable chains of wrapped functions
//!
//! A [`Chain`] is an ordered, singly-linked sequence of units. Each unit
//! owns a callable (anything implementing [`Wrappable`]), a parameters
//! payload, and the rest of the chain. Invoking a unit hands its callable
//! the stored params, the caller's args, and a [`FollowOn`] pointing at the
//! remainder of the chain. The callable decides whether, when, and with what
//! args to continue.
//!
//! | Operation | Method | What it does |
//! |-----------|--------|-------------|
//! | prepend | [`Chain::wrap_top`] | New superior unit in front of the chain |
//! | append | [`Chain::wrap_bottom`] | New subordinate unit after the tail |
//! | invoke | [`Chain::invoke`], [`FollowOn::invoke`] | Run one unit's callable |
//! | teardown | [`Chain::release_all`] | Release every unit exactly once |
//!
//! ## Payloads
//!
//! Params (`P`), args (`A`) and results (`R`) are generic. Their shape is a
//! contract between cooperating callables; the chain never inspects them.
//! Invoking an empty chain yields `Ok(None)`, which is how a chain ends.
//!
//! ## Recursion
//!
//! Continuation passing recurses on the host stack. Set
//! [`ChainConfig::max_depth`] to fail with [`ChainError::TooDeep`] instead
//! of overflowing on very long or runaway chains.
//!
//! ```
//! use wrapchain::{Chain, wrap_fn};
//!
//! let chain: Chain<i64, i64, i64> = Chain::new()
//!     .wrap_top(wrap_fn(|_: &i64, args: i64, _next| Ok(Some(args))), 0)
//!     .wrap_top(wrap_fn(|add: &i64, args: i64, next| next.invoke(args + *add)), 2);
//!
//! assert_eq!(chain.invoke(40).unwrap(), Some(42));
//! ```

#![deny(missing_docs)]

pub mod chain;
pub mod config;
pub mod error;
pub mod unit;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use chain::Chain;
pub use config::ChainConfig;
pub use error::ChainError;
pub use unit::{FollowOn, Outcome, WrapFn, Wrappable, wrap_fn};
