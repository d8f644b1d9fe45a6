//! Shared test fixtures for observer tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::facility::{
    ConnectivityFacility, FacilityError, NetworkCallback, NetworkFilter, NetworkHandle,
};

/// Token for one registration on a [`MockFacility`].
#[derive(Debug)]
pub struct MockToken;

/// How the mock should respond to `register`.
enum FailMode {
    InvalidFilter,
    Unavailable,
}

/// Mock facility that counts register/unregister calls.
///
/// Unlike `SimulatedFacility`, the mock keeps the last callback even after
/// unregistration so tests can deliver the late-callback race on purpose
/// via [`fire`](Self::fire).
#[derive(Default)]
pub struct MockFacility {
    callback: Mutex<Option<NetworkCallback>>,
    register_calls: AtomicUsize,
    unregister_calls: AtomicUsize,
    fail: Option<FailMode>,
}

impl MockFacility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that rejects every filter.
    pub fn rejecting_filters() -> Self {
        Self {
            fail: Some(FailMode::InvalidFilter),
            ..Self::new()
        }
    }

    /// Mock whose facility is unreachable.
    pub fn unreachable() -> Self {
        Self {
            fail: Some(FailMode::Unavailable),
            ..Self::new()
        }
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }

    /// Invokes the most recently registered callback, whether or not the
    /// registration is still active. Panics if none was ever registered.
    pub fn fire(&self, handle: NetworkHandle) {
        let callback = self.callback.lock().unwrap();
        callback.as_ref().expect("no callback registered")(handle);
    }

    /// Drops the retained callback, closing the delivery channel as a
    /// facility teardown would.
    pub fn tear_down(&self) {
        self.callback.lock().unwrap().take();
    }
}

impl ConnectivityFacility for MockFacility {
    type Token = MockToken;

    fn register(
        &self,
        _filter: &NetworkFilter,
        callback: NetworkCallback,
    ) -> Result<Self::Token, FacilityError> {
        match self.fail {
            Some(FailMode::InvalidFilter) => {
                return Err(FacilityError::InvalidFilter {
                    reason: "rejected by mock".to_string(),
                });
            }
            Some(FailMode::Unavailable) => {
                return Err(FacilityError::Unavailable {
                    reason: "mock offline".to_string(),
                });
            }
            None => {}
        }
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        *self.callback.lock().unwrap() = Some(callback);
        Ok(MockToken)
    }

    fn unregister(&self, _token: Self::Token) {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        // Callback intentionally retained; see type docs.
    }
}
