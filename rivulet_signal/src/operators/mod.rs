mod filter_result;
mod filter_type;
mod into_results;
mod lift_error;
mod skip_not_nil;

pub use filter_result::{FilterErrors, FilterValues, ResultValue};
pub use filter_type::{FilterType, Narrow};
pub use into_results::IntoResults;
pub use lift_error::LiftError;
pub use skip_not_nil::{OptionalValue, SkipNotNil};
