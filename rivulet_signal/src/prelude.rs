pub use super::NoError;
pub use super::error::SignalError;
pub use super::event::{Event, collect_events};
pub use super::ext::SignalExt;
pub use super::operators::{Narrow, OptionalValue, ResultValue};
pub use super::pipe::{Observer, Signal, pipe};
