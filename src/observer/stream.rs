//! Stream implementation bridging facility callbacks to async consumers.
//!
//! [`NetworkStream`] converts the facility's callback-based delivery into
//! a `tokio_stream::Stream`. Delivery goes through an unbounded channel:
//! the facility's callback performs a non-blocking send from whatever
//! context the platform invokes it in, and the stream drains the receiver
//! from the consumer's task.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::mpsc;
use tokio_stream::Stream;

use super::error::ObserveError;
use crate::facility::{ConnectivityFacility, NetworkCallback, NetworkFilter, NetworkHandle};

/// Subscription lifecycle.
enum StreamState<F: ConnectivityFacility> {
    /// Not yet polled; no facility registration exists.
    Idle { facility: F, filter: NetworkFilter },
    /// Registered; events flow through the channel.
    Active {
        receiver: mpsc::UnboundedReceiver<NetworkHandle>,
        guard: RegistrationGuard<F>,
    },
    /// Cancelled, failed, or exhausted; yields `None` forever.
    Terminated,
}

/// A lazy, cancellable stream of available-network events.
///
/// Created by [`observe_networks`](super::observe_networks). No facility
/// registration exists until the stream is first polled; after that, one
/// registration backs the stream until it is cancelled, dropped, or the
/// facility is torn down.
///
/// # Items
///
/// - `Ok(handle)` — a matching network became available
/// - `Err(ObserveError::Registration(_))` — the facility refused the
///   registration; yielded before any event, then the stream ends
/// - `Err(ObserveError::Stopped)` — delivery stopped while the
///   subscription was active; the stream ends after yielding it
///
/// # Cancellation
///
/// [`cancel`](Self::cancel) deregisters from the facility synchronously
/// and exactly once; calling it again (or dropping the stream afterwards)
/// does nothing further. Events the facility delivers after cancellation
/// are silently dropped.
pub struct NetworkStream<F: ConnectivityFacility> {
    state: StreamState<F>,
}

impl<F: ConnectivityFacility> std::fmt::Debug for NetworkStream<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            StreamState::Idle { .. } => "idle",
            StreamState::Active { .. } => "active",
            StreamState::Terminated => "terminated",
        };
        f.debug_struct("NetworkStream")
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

impl<F: ConnectivityFacility> NetworkStream<F> {
    pub(super) const fn new(facility: F, filter: NetworkFilter) -> Self {
        Self {
            state: StreamState::Idle { facility, filter },
        }
    }

    /// Returns true if the facility registration is currently in place.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, StreamState::Active { .. })
    }

    /// Returns true if the stream will yield no further items.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, StreamState::Terminated)
    }

    /// Cancels the subscription.
    ///
    /// If a registration is in place it is released synchronously, before
    /// this call returns. Cancelling an already-cancelled (or never
    /// activated) stream is a no-op. Any events still queued for delivery
    /// are discarded.
    pub fn cancel(&mut self) {
        match std::mem::replace(&mut self.state, StreamState::Terminated) {
            StreamState::Active {
                receiver,
                mut guard,
            } => {
                // Closing the channel first guarantees nothing queued or
                // in flight is ever observed after cancel returns.
                drop(receiver);
                guard.release();
            }
            StreamState::Idle { .. } | StreamState::Terminated => {}
        }
    }

    /// Registers with the facility and wires up the delivery channel.
    fn activate(
        facility: F,
        filter: &NetworkFilter,
    ) -> Result<(mpsc::UnboundedReceiver<NetworkHandle>, RegistrationGuard<F>), ObserveError> {
        let (sender, receiver) = mpsc::unbounded_channel();

        let callback: NetworkCallback = Arc::new(move |handle| {
            // A failed send means the subscriber is gone; events that
            // race with cancellation are dropped, not errored.
            if sender.send(handle).is_err() {
                tracing::trace!(%handle, "dropping event delivered after cancellation");
            }
        });

        let token = facility.register(filter, callback)?;
        tracing::debug!("network availability subscription active");
        Ok((receiver, RegistrationGuard::new(facility, token)))
    }
}

impl<F> Stream for NetworkStream<F>
where
    F: ConnectivityFacility + Unpin,
    F::Token: Unpin,
{
    type Item = Result<NetworkHandle, ObserveError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            // Take the state; every branch either restores it or leaves
            // the stream terminated.
            match std::mem::replace(&mut this.state, StreamState::Terminated) {
                StreamState::Idle { facility, filter } => {
                    match Self::activate(facility, &filter) {
                        Ok((receiver, guard)) => {
                            this.state = StreamState::Active { receiver, guard };
                            // Loop around to poll the fresh receiver.
                        }
                        Err(error) => return Poll::Ready(Some(Err(error))),
                    }
                }
                StreamState::Active {
                    mut receiver,
                    guard,
                } => {
                    return match receiver.poll_recv(cx) {
                        Poll::Ready(Some(handle)) => {
                            this.state = StreamState::Active { receiver, guard };
                            Poll::Ready(Some(Ok(handle)))
                        }
                        Poll::Ready(None) => {
                            // All senders gone while registered: the
                            // facility was torn down by its owner.
                            drop(guard);
                            Poll::Ready(Some(Err(ObserveError::Stopped)))
                        }
                        Poll::Pending => {
                            this.state = StreamState::Active { receiver, guard };
                            Poll::Pending
                        }
                    };
                }
                StreamState::Terminated => return Poll::Ready(None),
            }
        }
    }
}

/// RAII wrapper for one facility registration.
///
/// Releases the registration when dropped. `release` uses `Option::take`,
/// so the underlying unregister call happens at most once no matter how
/// many times release and drop run.
struct RegistrationGuard<F: ConnectivityFacility> {
    facility: F,
    token: Option<F::Token>,
}

impl<F: ConnectivityFacility> RegistrationGuard<F> {
    const fn new(facility: F, token: F::Token) -> Self {
        Self {
            facility,
            token: Some(token),
        }
    }

    fn release(&mut self) {
        if let Some(token) = self.token.take() {
            tracing::debug!("releasing network availability registration");
            self.facility.unregister(token);
        }
    }
}

impl<F: ConnectivityFacility> Drop for RegistrationGuard<F> {
    fn drop(&mut self) {
        self.release();
    }
}
