//! Registration trait for platform network-monitoring facilities.
//!
//! This module provides the [`ConnectivityFacility`] trait that abstracts
//! the platform call pair "register a callback for matching networks" /
//! "unregister it again".

use std::sync::Arc;

use super::{FacilityError, NetworkFilter, NetworkHandle};

/// Callback invoked by a facility when a matching network becomes available.
///
/// The facility chooses the invocation context; implementations of the
/// callback must not block. The `Arc` lets a facility deliver events
/// without holding its own locks across the call.
pub type NetworkCallback = Arc<dyn Fn(NetworkHandle) + Send + Sync + 'static>;

/// A platform facility that detects and reports network availability.
///
/// Implementations wrap platform registration APIs (or simulate one, see
/// [`SimulatedFacility`](super::SimulatedFacility)) behind a uniform
/// register/unregister pair.
///
/// # Registration Semantics
///
/// - `register` validates the filter and, on success, begins delivering
///   one callback invocation per matching network that becomes available,
///   in the order the facility detects them.
/// - The returned token identifies exactly one registration. It is
///   consumed by `unregister`, so a token cannot be released twice.
/// - After `unregister` returns, the facility no longer invokes the
///   callback for that registration.
pub trait ConnectivityFacility {
    /// Token identifying one active registration.
    type Token: Send;

    /// Registers a callback for networks matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::InvalidFilter`] if the filter fails the
    /// facility's validation rules, or [`FacilityError::Unavailable`] if
    /// the facility cannot be reached. No callback is ever invoked for a
    /// failed registration.
    fn register(
        &self,
        filter: &NetworkFilter,
        callback: NetworkCallback,
    ) -> Result<Self::Token, FacilityError>;

    /// Releases a registration.
    ///
    /// Takes the token by value; release is a one-shot operation.
    fn unregister(&self, token: Self::Token);
}

/// Shared facilities register through the same surface.
///
/// This lets a caller keep a clone of an `Arc`-held facility (to drive or
/// inspect it) while handing another clone to the observer.
impl<F> ConnectivityFacility for Arc<F>
where
    F: ConnectivityFacility + ?Sized,
{
    type Token = F::Token;

    fn register(
        &self,
        filter: &NetworkFilter,
        callback: NetworkCallback,
    ) -> Result<Self::Token, FacilityError> {
        self.as_ref().register(filter, callback)
    }

    fn unregister(&self, token: Self::Token) {
        self.as_ref().unregister(token);
    }
}
