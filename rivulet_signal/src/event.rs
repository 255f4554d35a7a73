use futures_util::{Stream, StreamExt};

/// A single event of a signal
///
/// A signal is a [`Stream`] of `Result<V, E>`: `Ok` items are [`Event::Value`], the first `Err`
/// is [`Event::Failed`] and the end of the stream is [`Event::Completed`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event<V, E> {
    Value(V),
    Failed(E),
    Completed,
}

impl<V, E> Event<V, E> {
    /// Builds an event from a polled stream item, [`None`] being completion
    pub fn from_item(item: Option<Result<V, E>>) -> Self {
        match item {
            Some(Ok(value)) => Self::Value(value),
            Some(Err(error)) => Self::Failed(error),
            None => Self::Completed,
        }
    }

    /// Turns the event back into the item a stream would yield
    pub fn into_item(self) -> Option<Result<V, E>> {
        match self {
            Self::Value(value) => Some(Ok(value)),
            Self::Failed(error) => Some(Err(error)),
            Self::Completed => None,
        }
    }

    /// Failed and Completed end a signal, nothing may follow them
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Value(_))
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Drains a signal into its full event sequence, including how it terminated
///
/// Stops at the first error even if the stream would keep yielding afterwards
pub async fn collect_events<S, V, E>(stream: S) -> Vec<Event<V, E>>
where
    S: Stream<Item = Result<V, E>>,
{
    futures::pin_mut!(stream);
    let mut events = Vec::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(value) => events.push(Event::Value(value)),
            Err(error) => {
                events.push(Event::Failed(error));
                return events;
            }
        }
    }
    events.push(Event::Completed);
    events
}
