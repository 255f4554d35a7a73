use crate::NoError;
use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Wraps every upstream event into a `Result` value so the output itself can never fail
///
/// Values become `Ok(Ok(value))`, the first error becomes a single `Ok(Err(error))` followed
/// by completion. Handy inside a `flat_map` where a failing inner signal should not tear down
/// the outer one, much like the event stream of an action.
#[derive(Debug)]
pub struct IntoResults<S> {
    stream: S,
    done: bool,
}

impl<S: Unpin> Unpin for IntoResults<S> {}

impl<S> IntoResults<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
        }
    }
}

impl<S, V, E> Stream for IntoResults<S>
where
    S: Stream<Item = Result<V, E>> + Unpin,
{
    type Item = Result<Result<V, E>, NoError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        match this.stream.poll_next_unpin(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(Ok(value))) => Poll::Ready(Some(Ok(Ok(value)))),
            Poll::Ready(Some(Err(error))) => {
                tracing::trace!("Upstream failed, emitting the error as a value");
                // upstream is not polled again once its error went out
                this.done = true;
                Poll::Ready(Some(Ok(Err(error))))
            }
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
        }
    }
}

impl<S, V, E> FusedStream for IntoResults<S>
where
    S: Stream<Item = Result<V, E>> + Unpin,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use futures::StreamExt;
    use futures::executor::block_on;
    use futures::stream;

    #[derive(Debug, Clone, PartialEq)]
    struct FetchError(u16);

    #[test]
    fn test_value_is_wrapped() {
        let results = stream::iter(vec![Ok::<_, FetchError>(())]).into_results();
        let events = block_on(collect_events(results));
        assert_eq!(events, vec![Event::Value(Ok(())), Event::Completed]);
    }

    #[test]
    fn test_error_is_wrapped() {
        let results = stream::iter(vec![Err::<(), _>(FetchError(404))]).into_results();
        let events = block_on(collect_events(results));
        assert_eq!(
            events,
            vec![Event::Value(Err(FetchError(404))), Event::Completed]
        );
    }

    #[test]
    fn test_values_and_errors() {
        let results = stream::iter(vec![Ok(1), Ok(2), Err(FetchError(500)), Ok(3)]).into_results();
        let events = block_on(collect_events(results));
        assert_eq!(
            events,
            vec![
                Event::Value(Ok(1)),
                Event::Value(Ok(2)),
                Event::Value(Err(FetchError(500))),
                Event::Completed
            ]
        );
    }

    #[test]
    fn test_empty() {
        let results = stream::iter(Vec::<Result<u8, FetchError>>::new()).into_results();
        let events = block_on(collect_events(results));
        assert_eq!(events, vec![Event::Completed]);
    }

    #[tokio::test]
    async fn test_pipe_value_error_value() {
        let (observer, signal) = pipe::<(), FetchError>();
        let results = signal.into_results();
        observer.send_value(()).unwrap();
        observer.send_error(FetchError(0)).unwrap();
        assert!(observer.send_value(()).is_err());

        let collected: Vec<_> = results.collect().await;
        assert_eq!(collected, vec![Ok(Ok(())), Ok(Err(FetchError(0)))]);
    }
}
