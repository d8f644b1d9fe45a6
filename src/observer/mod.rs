//! Observer layer: network availability as an async stream.
//!
//! This module provides:
//! - [`observe_networks`]: entry point producing a lazy [`NetworkStream`]
//! - [`NetworkStream`]: cancellable stream of available-network events
//! - [`first_network`]: awaits a single matching network
//! - [`ObserveError`]: error type for subscriptions

mod error;
mod first;
mod stream;

pub use error::ObserveError;
pub use first::first_network;
pub use stream::NetworkStream;

use crate::facility::{ConnectivityFacility, NetworkFilter};

#[cfg(test)]
mod test_fixtures;

/// Observes networks matching `filter` as they become available.
///
/// The returned stream is lazy: no facility registration happens until it
/// is first polled. Once active, it yields one [`NetworkHandle`] per
/// matching network the facility reports, in delivery order, until
/// cancelled or dropped.
///
/// Registration failures ([`crate::facility::FacilityError`]) are yielded
/// as the stream's first and only item.
///
/// [`NetworkHandle`]: crate::facility::NetworkHandle
///
/// # Example
///
/// ```
/// use connectivity_stream::facility::{
///     Capability, NetworkFilter, NetworkHandle, SimulatedFacility, Transport,
/// };
/// use connectivity_stream::observer::observe_networks;
/// use std::sync::Arc;
/// use tokio_stream::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let facility = Arc::new(SimulatedFacility::new());
/// let filter = NetworkFilter::builder().capability(Capability::Internet).build();
/// let mut stream = observe_networks(Arc::clone(&facility), filter);
///
/// // Announce once the subscriber's registration is in place.
/// let announcer = Arc::clone(&facility);
/// tokio::spawn(async move {
///     while announcer.active_registrations() == 0 {
///         tokio::time::sleep(std::time::Duration::from_millis(1)).await;
///     }
///     announcer.announce(
///         NetworkHandle::from_raw(1),
///         Transport::Wifi,
///         &[Capability::Internet],
///     );
/// });
///
/// let network = stream.next().await.unwrap().unwrap();
/// assert_eq!(network, NetworkHandle::from_raw(1));
/// # }
/// ```
pub fn observe_networks<F>(facility: F, filter: NetworkFilter) -> NetworkStream<F>
where
    F: ConnectivityFacility,
{
    NetworkStream::new(facility, filter)
}
