use crate::operators::*;
use futures_util::Stream;

/// Signal operators, available on every stream of `Result<V, E>`
///
/// An `Ok` item is a value, the first `Err` terminates the signal and the end of the stream
/// completes it. None of the operators buffer, spawn or block; each one runs inline in
/// whatever task polls it. Dropping the returned stream drops the upstream with it.
///
/// Adapters require an [`Unpin`] upstream, [`Box::pin`] or [`futures::pin_mut!`] anything else.
pub trait SignalExt<V, E>: Stream<Item = Result<V, E>> + Sized {
    /// Swaps the error type by completing on the first upstream error
    fn lift_error<NewError>(self) -> LiftError<Self, NewError> {
        LiftError::new(self)
    }

    /// Turns every event into a `Result` value, yielding a signal that can't fail
    fn into_results(self) -> IntoResults<Self> {
        IntoResults::new(self)
    }

    /// Keeps only the values narrowing into `T`
    fn filter_type<T>(self) -> FilterType<Self, T>
    where
        V: Narrow<T>,
    {
        FilterType::new(self)
    }

    /// Forwards only the absent values, the present ones are skipped
    fn skip_not_nil(self) -> SkipNotNil<Self>
    where
        V: OptionalValue,
    {
        SkipNotNil::new(self)
    }

    /// Unwraps the successes of a signal of results, skipping the failures
    fn filter_values(self) -> FilterValues<Self>
    where
        V: ResultValue,
    {
        FilterValues::new(self)
    }

    /// Unwraps the failures of a signal of results, skipping the successes
    fn filter_errors(self) -> FilterErrors<Self>
    where
        V: ResultValue,
    {
        FilterErrors::new(self)
    }
}

impl<S, V, E> SignalExt<V, E> for S where S: Stream<Item = Result<V, E>> {}
