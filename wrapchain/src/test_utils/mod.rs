//! Helpers for testing chains.
//!
//! Available behind the `test-utils` feature flag.

mod recorder;
mod release_probe;

pub use recorder::Recorder;
pub use release_probe::ReleaseProbe;
