//! Facility layer: the platform-side network-monitoring abstraction.
//!
//! This module provides types and traits for:
//! - Identifying active networks ([`NetworkHandle`])
//! - Selecting networks of interest ([`NetworkFilter`], [`Transport`], [`Capability`])
//! - Registering for availability callbacks ([`ConnectivityFacility`])
//! - Error handling ([`FacilityError`])
//! - Driving events in-process ([`SimulatedFacility`])

mod error;
mod filter;
mod handle;
mod registry;
mod simulated;

#[cfg(test)]
mod filter_tests;

pub use error::FacilityError;
pub use filter::{Capability, NetworkFilter, NetworkFilterBuilder, Transport};
pub use handle::NetworkHandle;
pub use registry::{ConnectivityFacility, NetworkCallback};
pub use simulated::{SimulatedFacility, SimulatedToken};
