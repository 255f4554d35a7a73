use derivative::Derivative;
use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Pattern-match conversion of a value into one of the types it may hold
///
/// Signals carrying several kinds of values model them as a closed enum. Implementing
/// `Narrow<T>` for that enum lets [`crate::SignalExt::filter_type`] pick out the `T`s.
/// Every type narrows into itself. See [`crate::narrowing!`] for generating impls.
pub trait Narrow<T>: Sized {
    fn narrow(self) -> Option<T>;
}

impl<T> Narrow<T> for T {
    fn narrow(self) -> Option<T> {
        Some(self)
    }
}

/// Implements [`Narrow`] for single field enum variants
///
/// ```
/// use rivulet_signal::{Narrow, narrowing};
///
/// struct Ping(u32);
/// struct Pong(u32);
///
/// enum Message {
///     Ping(Ping),
///     Pong(Pong),
/// }
///
/// narrowing!(Message {
///     Ping => Ping,
///     Pong => Pong,
/// });
///
/// let ping: Option<Ping> = Message::Ping(Ping(1)).narrow();
/// assert!(ping.is_some());
/// let pong: Option<Pong> = Message::Ping(Ping(1)).narrow();
/// assert!(pong.is_none());
/// ```
#[macro_export]
macro_rules! narrowing {
    ($source:ty { $($variant:ident => $target:ty),+ $(,)? }) => {
        $(
            impl $crate::Narrow<$target> for $source {
                #[allow(unreachable_patterns)]
                fn narrow(self) -> ::core::option::Option<$target> {
                    match self {
                        Self::$variant(inner) => ::core::option::Option::Some(inner),
                        _ => ::core::option::Option::None,
                    }
                }
            }
        )+
    };
}

/// Keeps only the values that narrow into `T`, preserving their order
#[derive(Derivative)]
#[derivative(Debug(bound = "S: std::fmt::Debug"))]
pub struct FilterType<S, T> {
    stream: S,
    done: bool,
    #[derivative(Debug = "ignore")]
    _target: PhantomData<fn() -> T>,
}

impl<S: Unpin, T> Unpin for FilterType<S, T> {}

impl<S, T> FilterType<S, T> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            done: false,
            _target: PhantomData,
        }
    }
}

impl<S, V, E, T> Stream for FilterType<S, T>
where
    S: Stream<Item = Result<V, E>> + Unpin,
    V: Narrow<T>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        loop {
            match this.stream.poll_next_unpin(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(Ok(value))) => {
                    if let Some(narrowed) = Narrow::<T>::narrow(value) {
                        return Poll::Ready(Some(Ok(narrowed)));
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

impl<S, V, E, T> FusedStream for FilterType<S, T>
where
    S: Stream<Item = Result<V, E>> + Unpin,
    V: Narrow<T>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
