//! In-process connectivity facility for tests and embedders.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Capability, ConnectivityFacility, FacilityError, NetworkCallback, NetworkFilter, NetworkHandle, Transport};

/// Token for one registration on a [`SimulatedFacility`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SimulatedToken(u64);

/// One active registration.
struct Registration {
    filter: NetworkFilter,
    callback: NetworkCallback,
}

/// In-process implementation of [`ConnectivityFacility`].
///
/// Where a real deployment would wrap an OS network-monitoring API, this
/// facility lets the process itself play the platform: callers announce
/// networks with [`announce`](Self::announce) and every registration whose
/// filter matches is notified, in announcement order.
///
/// Useful for deterministic tests and for embedding environments that feed
/// connectivity state from elsewhere.
///
/// # Example
///
/// ```
/// use connectivity_stream::facility::{
///     Capability, ConnectivityFacility, NetworkFilter, NetworkHandle, SimulatedFacility,
///     Transport,
/// };
/// use std::sync::Arc;
///
/// let facility = SimulatedFacility::new();
/// let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let token = facility
///     .register(
///         &NetworkFilter::builder().capability(Capability::Internet).build(),
///         Arc::new(move |handle| sink.lock().unwrap().push(handle)),
///     )
///     .unwrap();
///
/// facility.announce(
///     NetworkHandle::from_raw(1),
///     Transport::Wifi,
///     &[Capability::Internet],
/// );
/// facility.unregister(token);
///
/// assert_eq!(seen.lock().unwrap().as_slice(), &[NetworkHandle::from_raw(1)]);
/// ```
pub struct SimulatedFacility {
    registrations: Mutex<HashMap<u64, Registration>>,
    next_token: AtomicU64,
    available: bool,
}

impl std::fmt::Debug for SimulatedFacility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedFacility")
            .field("active_registrations", &self.active_registrations())
            .field("available", &self.available)
            .finish_non_exhaustive()
    }
}

impl SimulatedFacility {
    /// Creates an available facility with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registrations: Mutex::new(HashMap::new()),
            next_token: AtomicU64::new(1),
            available: true,
        }
    }

    /// Creates a facility that rejects every registration with
    /// [`FacilityError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            registrations: Mutex::new(HashMap::new()),
            next_token: AtomicU64::new(1),
            available: false,
        }
    }

    /// Returns the number of currently active registrations.
    ///
    /// # Panics
    ///
    /// Panics if an announcing or registering thread panicked while
    /// holding the internal lock.
    #[must_use]
    pub fn active_registrations(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }

    /// Announces that a network became available.
    ///
    /// Every registration whose filter matches the given transport and
    /// advertised capabilities is invoked with `handle`, from the calling
    /// thread. Returns the number of registrations notified.
    ///
    /// Callbacks are invoked outside the internal lock, so a callback may
    /// re-enter the facility.
    ///
    /// # Panics
    ///
    /// Panics if another thread panicked while holding the internal lock.
    pub fn announce(
        &self,
        handle: NetworkHandle,
        transport: Transport,
        capabilities: &[Capability],
    ) -> usize {
        let matching: Vec<NetworkCallback> = {
            let registrations = self.registrations.lock().unwrap();
            registrations
                .values()
                .filter(|registration| registration.filter.matches(transport, capabilities))
                .map(|registration| NetworkCallback::clone(&registration.callback))
                .collect()
        };

        tracing::trace!(
            %handle,
            %transport,
            notified = matching.len(),
            "announcing network availability"
        );

        for callback in &matching {
            callback(handle);
        }
        matching.len()
    }
}

impl Default for SimulatedFacility {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityFacility for SimulatedFacility {
    type Token = SimulatedToken;

    fn register(
        &self,
        filter: &NetworkFilter,
        callback: NetworkCallback,
    ) -> Result<Self::Token, FacilityError> {
        if !self.available {
            return Err(FacilityError::Unavailable {
                reason: "simulated facility is offline".to_string(),
            });
        }
        filter.validate()?;

        let id = self.next_token.fetch_add(1, Ordering::Relaxed);
        self.registrations.lock().unwrap().insert(
            id,
            Registration {
                filter: filter.clone(),
                callback,
            },
        );
        tracing::debug!(token = id, "registered network callback");
        Ok(SimulatedToken(id))
    }

    fn unregister(&self, token: Self::Token) {
        let removed = self.registrations.lock().unwrap().remove(&token.0);
        tracing::debug!(token = token.0, known = removed.is_some(), "unregistered network callback");
    }
}
