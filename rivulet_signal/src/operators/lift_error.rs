use derivative::Derivative;
use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Forwards values untouched and turns the first upstream error into completion
///
/// The output never fails, so `NewError` may be any type. Usually that is
/// [`crate::NoError`] or whatever error type the surrounding `flat_map` expects.
#[derive(Derivative)]
#[derivative(Debug(bound = "S: std::fmt::Debug"))]
pub struct LiftError<S, NewError> {
    stream: S,
    done: bool,
    #[derivative(Debug = "ignore")]
    _error: PhantomData<fn() -> NewError>,
}

impl<S: Unpin, NewError> Unpin for LiftError<S, NewError> {}

impl<S, NewError> LiftError<S, NewError> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
            _error: PhantomData,
        }
    }
}

impl<S, V, E, NewError> Stream for LiftError<S, NewError>
where
    S: Stream<Item = Result<V, E>> + Unpin,
{
    type Item = Result<V, NewError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        match this.stream.poll_next_unpin(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(Ok(value))) => Poll::Ready(Some(Ok(value))),
            Poll::Ready(Some(Err(_))) => {
                tracing::trace!("Upstream failed, completing lifted signal instead");
                this.done = true;
                Poll::Ready(None)
            }
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
        }
    }
}

impl<S, V, E, NewError> FusedStream for LiftError<S, NewError>
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
    use futures::stream::{self, FusedStream};

    #[derive(Debug, Clone, PartialEq)]
    struct LoadError;

    #[test]
    fn test_values_pass_through() {
        let lifted =
            stream::iter(vec![Ok::<_, LoadError>(1), Ok(2), Ok(3)]).lift_error::<NoError>();
        let events = block_on(collect_events(lifted));
        assert_eq!(
            events,
            vec![
                Event::Value(1),
                Event::Value(2),
                Event::Value(3),
                Event::Completed
            ]
        );
    }

    #[test]
    fn test_error_becomes_completion() {
        let lifted = stream::iter(vec![Ok(1), Err(LoadError)]).lift_error::<String>();
        let events = block_on(collect_events(lifted));
        assert_eq!(events, vec![Event::Value(1), Event::Completed]);
    }

    #[test]
    fn test_only_error() {
        let lifted = stream::iter(vec![Err::<(), _>(LoadError)]).lift_error::<NoError>();
        let events = block_on(collect_events(lifted));
        assert_eq!(events, vec![Event::Completed]);
    }

    #[test]
    fn test_nothing_after_error() {
        let mut lifted =
            stream::iter(vec![Ok(1), Err(LoadError), Ok(2), Ok(3)]).lift_error::<NoError>();
        let values = block_on(async {
            let mut values = Vec::new();
            while let Some(value) = lifted.next().await {
                values.push(value.unwrap());
            }
            values
        });
        assert_eq!(values, vec![1]);
        assert!(lifted.is_terminated());
        assert_eq!(block_on(lifted.next()), None);
    }

    #[tokio::test]
    async fn test_lifted_pipe() {
        let (observer, signal) = pipe::<(), LoadError>();
        let lifted = signal.lift_error::<NoError>();
        observer.send_value(()).unwrap();
        observer.send_value(()).unwrap();
        observer.send_completed().unwrap();

        let values: Vec<_> = lifted.collect().await;
        assert_eq!(values.len(), 2);
    }
}
