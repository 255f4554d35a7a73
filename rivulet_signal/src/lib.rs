//! Operators reshaping the value and error sides of signals
//!
//! A signal is any [`futures::Stream`] of `Result<V, E>`. See [`SignalExt`] for the operators
//! and [`pipe`] for feeding a signal by hand.

pub mod error;
pub mod event;
pub mod ext;
pub mod operators;
pub mod pipe;
pub mod prelude;

pub use error::SignalError;
pub use event::{Event, collect_events};
pub use ext::SignalExt;
pub use operators::*;
pub use pipe::{Observer, Signal, pipe};

/// Error type of a signal that never fails
pub type NoError = std::convert::Infallible;
