//! Error types for the facility layer.

use thiserror::Error;

/// Error raised by a facility when a registration cannot be created.
///
/// Both variants surface synchronously at registration time, before any
/// event is delivered. The observer propagates them unchanged.
#[derive(Debug, Error)]
pub enum FacilityError {
    /// The filter was rejected by the facility's validation rules.
    #[error("invalid network filter: {reason}")]
    InvalidFilter {
        /// Why the facility rejected the filter.
        reason: String,
    },

    /// The facility itself cannot be reached.
    #[error("connectivity facility unavailable: {reason}")]
    Unavailable {
        /// Why the facility is unreachable.
        reason: String,
    },
}
