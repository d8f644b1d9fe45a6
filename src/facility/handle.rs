//! Opaque network handle type.

use std::fmt;

/// Opaque identifier for one active network connection.
///
/// A handle is created by the platform facility when a network comes up
/// and remains valid for as long as the platform says it does. The
/// observer never constructs or destroys handles on its own; it only
/// reports the handles the facility delivered.
///
/// Handles are cheap to copy and compare, and carry no information about
/// the network beyond its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkHandle(u64);

impl NetworkHandle {
    /// Creates a handle from a raw platform identifier.
    ///
    /// Intended for [`ConnectivityFacility`](super::ConnectivityFacility)
    /// implementations; consumers should treat handles as opaque.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw platform identifier.
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NetworkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net#{}", self.0)
    }
}
