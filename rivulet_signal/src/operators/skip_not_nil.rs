use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Values that may or may not hold a payload
pub trait OptionalValue {
    fn is_absent(&self) -> bool;
}

impl<T> OptionalValue for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Forwards only the absent values of a signal of optionals
///
/// Despite the name, present values are the ones dropped: the output carries every
/// `None` in order and nothing else. Errors go through untouched.
#[derive(Debug)]
pub struct SkipNotNil<S> {
    stream: S,
    done: bool,
}

impl<S: Unpin> Unpin for SkipNotNil<S> {}

impl<S> SkipNotNil<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
        }
    }
}

impl<S, V, E> Stream for SkipNotNil<S>
where
    S: Stream<Item = Result<V, E>> + Unpin,
    V: OptionalValue,
{
    type Item = Result<V, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        loop {
            match this.stream.poll_next_unpin(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(Ok(value))) => {
                    if value.is_absent() {
                        return Poll::Ready(Some(Ok(value)));
                    }
                }
                Poll::Ready(Some(Err(error))) => {
                    this.done = true;
                    return Poll::Ready(Some(Err(error)));
                }
                Poll::Ready(None) => {
                    this.done = true;
                    return Poll::Ready(None);
                }
            }
        }
    }
}

impl<S, V, E> FusedStream for SkipNotNil<S>
where
    S: Stream<Item = Result<V, E>> + Unpin,
    V: OptionalValue,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use futures::executor::block_on;
    use futures::stream;

    #[test]
    fn test_drops_present_values() {
        let absent =
            stream::iter(vec![Ok::<Option<i32>, NoError>(None), Ok(Some(7))]).skip_not_nil();
        let events = block_on(collect_events(absent));
        assert_eq!(events, vec![Event::Value(None), Event::Completed]);
    }

    #[test]
    fn test_all_absent() {
        let absent = stream::iter(vec![Ok::<Option<i32>, NoError>(None), Ok(None)]).skip_not_nil();
        let events = block_on(collect_events(absent));
        assert_eq!(
            events,
            vec![Event::Value(None), Event::Value(None), Event::Completed]
        );
    }

    #[test]
    fn test_absent_present_absent() {
        let absent = stream::iter(vec![
            Ok::<Option<i32>, NoError>(None),
            Ok(Some(7)),
            Ok(None),
        ])
        .skip_not_nil();
        let events = block_on(collect_events(absent));
        assert_eq!(
            events,
            vec![Event::Value(None), Event::Value(None), Event::Completed]
        );
    }

    #[test]
    fn test_error_propagates() {
        let absent =
            stream::iter(vec![Ok(Some(1)), Ok(None), Err("gone"), Ok(None)]).skip_not_nil();
        let events = block_on(collect_events(absent));
        assert_eq!(events, vec![Event::Value(None), Event::Failed("gone")]);
    }
}
