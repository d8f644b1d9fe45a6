//! Error types for the observer layer.

use crate::facility::FacilityError;
use thiserror::Error;

/// Error type for network observation.
///
/// A subscription fails in one of two ways: the facility refuses the
/// registration up front, or event delivery stops while the subscription
/// is still active. Either way the stream yields the error once and then
/// ends; no retries are attempted.
#[derive(Debug, Error)]
pub enum ObserveError {
    /// The facility rejected or could not accept the registration.
    #[error("registration failed: {0}")]
    Registration(#[from] FacilityError),

    /// Event delivery stopped unexpectedly.
    ///
    /// This happens when the underlying facility is torn down by its
    /// owner while a subscription is still active.
    #[error("event delivery stopped unexpectedly")]
    Stopped,
}
