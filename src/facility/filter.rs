//! Network selection criteria.
//!
//! A [`NetworkFilter`] describes which networks a subscriber wants to be
//! notified about, by transport and by advertised capability. Filters are
//! immutable for the duration of one subscription and are validated by the
//! facility at registration time.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::FacilityError;

/// Physical or logical transport a network rides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    Wifi,
    Cellular,
    Ethernet,
    Bluetooth,
    Vpn,
    Loopback,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wifi => "wifi",
            Self::Cellular => "cellular",
            Self::Ethernet => "ethernet",
            Self::Bluetooth => "bluetooth",
            Self::Vpn => "vpn",
            Self::Loopback => "loopback",
        };
        f.write_str(name)
    }
}

/// Capability a network advertises.
///
/// Most capabilities can be requested in a filter. [`Capability::Validated`]
/// and [`Capability::CaptivePortal`] are assigned by the platform as it
/// evaluates a network and cannot be requested; a filter naming them is
/// rejected at registration with [`FacilityError::InvalidFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The network is expected to provide internet access.
    Internet,
    /// The network is not metered by the carrier.
    NotMetered,
    /// The network is not a VPN.
    NotVpn,
    /// The network is trusted by the platform.
    Trusted,
    /// The platform has verified internet access (platform-assigned).
    Validated,
    /// The network is behind a captive portal (platform-assigned).
    CaptivePortal,
}

impl Capability {
    /// Returns true if this capability may appear in a filter.
    #[must_use]
    pub const fn is_requestable(self) -> bool {
        !matches!(self, Self::Validated | Self::CaptivePortal)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Internet => "internet",
            Self::NotMetered => "not_metered",
            Self::NotVpn => "not_vpn",
            Self::Trusted => "trusted",
            Self::Validated => "validated",
            Self::CaptivePortal => "captive_portal",
        };
        f.write_str(name)
    }
}

/// Criteria selecting which networks to observe.
///
/// Matching semantics:
/// - **Transports (OR)**: the network's transport must be one of the
///   requested transports; an empty set matches any transport.
/// - **Capabilities (AND)**: the network must advertise every requested
///   capability; an empty set places no capability requirement.
///
/// The default filter matches every network.
///
/// # Examples
///
/// ```
/// use connectivity_stream::facility::{Capability, NetworkFilter, Transport};
///
/// let filter = NetworkFilter::builder()
///     .transport(Transport::Wifi)
///     .transport(Transport::Cellular)
///     .capability(Capability::Internet)
///     .build();
///
/// assert!(filter.matches(Transport::Wifi, &[Capability::Internet]));
/// assert!(!filter.matches(Transport::Ethernet, &[Capability::Internet]));
/// assert!(!filter.matches(Transport::Wifi, &[]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkFilter {
    /// Accepted transports; empty means any.
    #[serde(default)]
    transports: HashSet<Transport>,
    /// Required capabilities; all must be advertised.
    #[serde(default)]
    capabilities: HashSet<Capability>,
}

impl NetworkFilter {
    /// Returns a filter matching every network.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Starts building a filter.
    #[must_use]
    pub fn builder() -> NetworkFilterBuilder {
        NetworkFilterBuilder::default()
    }

    /// Returns the accepted transports.
    #[must_use]
    pub const fn transports(&self) -> &HashSet<Transport> {
        &self.transports
    }

    /// Returns the required capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &HashSet<Capability> {
        &self.capabilities
    }

    /// Returns true if a network with the given transport and advertised
    /// capabilities satisfies this filter.
    #[must_use]
    pub fn matches(&self, transport: Transport, capabilities: &[Capability]) -> bool {
        let transport_ok = self.transports.is_empty() || self.transports.contains(&transport);
        let capabilities_ok = self
            .capabilities
            .iter()
            .all(|required| capabilities.contains(required));
        transport_ok && capabilities_ok
    }

    /// Checks that every requested capability is requestable.
    ///
    /// Facility implementations call this before creating a registration.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::InvalidFilter`] naming the first
    /// platform-assigned capability found in the filter.
    pub fn validate(&self) -> Result<(), FacilityError> {
        if let Some(capability) = self
            .capabilities
            .iter()
            .find(|capability| !capability.is_requestable())
        {
            return Err(FacilityError::InvalidFilter {
                reason: format!("capability {capability} is platform-assigned and cannot be requested"),
            });
        }
        Ok(())
    }
}

/// Builder for [`NetworkFilter`].
///
/// Building never fails; validation happens at registration time so that
/// rejection is surfaced by the facility, matching where the platform
/// applies its own rules.
#[derive(Debug, Clone, Default)]
pub struct NetworkFilterBuilder {
    transports: HashSet<Transport>,
    capabilities: HashSet<Capability>,
}

impl NetworkFilterBuilder {
    /// Adds an accepted transport.
    #[must_use]
    pub fn transport(mut self, transport: Transport) -> Self {
        self.transports.insert(transport);
        self
    }

    /// Adds a required capability.
    #[must_use]
    pub fn capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Finishes the filter.
    #[must_use]
    pub fn build(self) -> NetworkFilter {
        NetworkFilter {
            transports: self.transports,
            capabilities: self.capabilities,
        }
    }
}
