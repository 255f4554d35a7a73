use crate::error::SignalError;
use crate::event::Event;
use derivative::Derivative;
use futures::channel::mpsc;
use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

/// Creates a hot signal together with the observer that feeds it
///
/// Events sent before anyone polls the signal are buffered. Dropping every [`Observer`]
/// completes the signal, dropping the [`Signal`] disposes it.
pub fn pipe<V, E>() -> (Observer<V, E>, Signal<V, E>) {
    let (sender, receiver) = mpsc::unbounded();
    (
        Observer {
            sender,
            terminated: Arc::new(AtomicBool::new(false)),
        },
        Signal {
            receiver,
            done: false,
        },
    )
}

/// Sending half of a [`pipe`]
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Observer<V, E> {
    #[derivative(Debug = "ignore")]
    sender: mpsc::UnboundedSender<Event<V, E>>,
    /// Shared between clones so only one terminal event is ever delivered
    terminated: Arc<AtomicBool>,
}

impl<V, E> Clone for Observer<V, E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            terminated: self.terminated.clone(),
        }
    }
}

impl<V, E> Observer<V, E> {
    pub fn send_value(&self, value: V) -> Result<(), SignalError> {
        self.send(Event::Value(value))
    }

    pub fn send_error(&self, error: E) -> Result<(), SignalError> {
        self.send(Event::Failed(error))
    }

    pub fn send_completed(&self) -> Result<(), SignalError> {
        self.send(Event::Completed)
    }

    /// Delivers an event to the signal
    ///
    /// Terminal events close the pipe for every clone of this observer
    pub fn send(&self, event: Event<V, E>) -> Result<(), SignalError> {
        if self.is_terminated() {
            tracing::warn!("Tried sending into an already terminated signal");
            return Err(SignalError::Terminated);
        }
        // a disposed pipe never becomes terminated, a clone completing closes the channel too
        if self.sender.is_closed() {
            if self.is_terminated() {
                return Err(SignalError::Terminated);
            }
            tracing::warn!("Tried sending into a disposed signal");
            return Err(SignalError::Disposed);
        }

        let terminal = event.is_terminal();
        if terminal
            && self
                .terminated
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
        {
            tracing::warn!("Tried sending a terminal event into an already terminated signal");
            return Err(SignalError::Terminated);
        }

        match self.sender.unbounded_send(event) {
            Ok(()) => {
                if terminal {
                    self.sender.close_channel();
                }
                Ok(())
            }
            Err(_) if terminal => {
                // the signal went away between the check and the send
                self.terminated.store(false, Ordering::Release);
                Err(SignalError::Disposed)
            }
            Err(_) if self.is_terminated() => Err(SignalError::Terminated),
            Err(_) => Err(SignalError::Disposed),
        }
    }

    /// Whether a terminal event went through this observer or one of its clones
    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }

    /// Whether the signal side was dropped before the observer terminated it
    pub fn is_disposed(&self) -> bool {
        !self.is_terminated() && self.sender.is_closed()
    }
}

/// Receiving half of a [`pipe`]
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Signal<V, E> {
    #[derivative(Debug = "ignore")]
    receiver: mpsc::UnboundedReceiver<Event<V, E>>,
    done: bool,
}

impl<V, E> Unpin for Signal<V, E> {}

impl<V, E> Stream for Signal<V, E> {
    type Item = Result<V, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        match this.receiver.poll_next_unpin(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(Event::Value(value))) => Poll::Ready(Some(Ok(value))),
            Poll::Ready(Some(Event::Failed(error))) => {
                this.done = true;
                Poll::Ready(Some(Err(error)))
            }
            Poll::Ready(Some(Event::Completed)) | Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
        }
    }
}

impl<V, E> FusedStream for Signal<V, E> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
