use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Values that are either a success or a failure
pub trait ResultValue {
    type Value;
    type Error;

    fn into_result(self) -> Result<Self::Value, Self::Error>;
}

impl<V, E> ResultValue for Result<V, E> {
    type Value = V;
    type Error = E;

    fn into_result(self) -> Result<V, E> {
        self
    }
}

/// Keeps the success payloads of a signal of results, dropping the failures
#[derive(Debug)]
pub struct FilterValues<S> {
    stream: S,
    done: bool,
}

/// Keeps the failure payloads of a signal of results, dropping the successes
#[derive(Debug)]
pub struct FilterErrors<S> {
    stream: S,
    done: bool,
}

impl<S: Unpin> Unpin for FilterValues<S> {}
impl<S: Unpin> Unpin for FilterErrors<S> {}

impl<S> FilterValues<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
        }
    }
}

impl<S> FilterErrors<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
        }
    }
}

/// Polls until a payload survives `pick`, the outer error shows up, or upstream ends
fn poll_picked<S, V, E, T>(
    stream: &mut S,
    done: &mut bool,
    cx: &mut Context<'_>,
    pick: impl Fn(V) -> Option<T>,
) -> Poll<Option<Result<T, E>>>
where
    S: Stream<Item = Result<V, E>> + Unpin,
{
    if *done {
        return Poll::Ready(None);
    }

    loop {
        match stream.poll_next_unpin(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Some(Ok(value))) => {
                if let Some(picked) = pick(value) {
                    return Poll::Ready(Some(Ok(picked)));
                }
            }
            Poll::Ready(Some(Err(error))) => {
                *done = true;
                return Poll::Ready(Some(Err(error)));
            }
            Poll::Ready(None) => {
                *done = true;
                return Poll::Ready(None);
            }
        }
    }
}

impl<S, R, E> Stream for FilterValues<S>
where
    S: Stream<Item = Result<R, E>> + Unpin,
    R: ResultValue,
{
    type Item = Result<R::Value, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        poll_picked(&mut this.stream, &mut this.done, cx, |result: R| {
            result.into_result().ok()
        })
    }
}

impl<S, R, E> Stream for FilterErrors<S>
where
    S: Stream<Item = Result<R, E>> + Unpin,
    R: ResultValue,
{
    type Item = Result<R::Error, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        poll_picked(&mut this.stream, &mut this.done, cx, |result: R| {
            result.into_result().err()
        })
    }
}

impl<S, R, E> FusedStream for FilterValues<S>
where
    S: Stream<Item = Result<R, E>> + Unpin,
    R: ResultValue,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<S, R, E> FusedStream for FilterErrors<S>
where
    S: Stream<Item = Result<R, E>> + Unpin,
    R: ResultValue,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
