//! Await a single matching network.

use tokio_stream::StreamExt;

use super::error::ObserveError;
use super::observe_networks;
use crate::facility::{ConnectivityFacility, NetworkFilter, NetworkHandle};

/// Waits for the first network matching `filter` to become available.
///
/// Subscribes, takes the first event, and releases the registration before
/// returning. There is no timeout; callers wanting one should wrap this in
/// `tokio::time::timeout`.
///
/// # Errors
///
/// Returns [`ObserveError::Registration`] if the facility rejects the
/// filter or is unavailable, and [`ObserveError::Stopped`] if delivery
/// stops before any network appears.
pub async fn first_network<F>(
    facility: F,
    filter: NetworkFilter,
) -> Result<NetworkHandle, ObserveError>
where
    F: ConnectivityFacility + Unpin,
    F::Token: Unpin,
{
    let mut stream = observe_networks(facility, filter);
    // The stream drops on return, releasing the registration.
    stream.next().await.unwrap_or(Err(ObserveError::Stopped))
}
