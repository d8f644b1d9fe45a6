//! Tests for `NetworkFilter` matching and validation.

use super::filter::{Capability, NetworkFilter, Transport};

#[test]
fn empty_filter_matches_everything() {
    let filter = NetworkFilter::any();

    assert!(filter.matches(Transport::Wifi, &[]));
    assert!(filter.matches(Transport::Cellular, &[Capability::Internet]));
    assert!(filter.matches(Transport::Loopback, &[Capability::Validated]));
}

#[test]
fn transport_set_is_or_semantics() {
    let filter = NetworkFilter::builder()
        .transport(Transport::Wifi)
        .transport(Transport::Cellular)
        .build();

    assert!(filter.matches(Transport::Wifi, &[]));
    assert!(filter.matches(Transport::Cellular, &[]));
    assert!(!filter.matches(Transport::Ethernet, &[]));
}

#[test]
fn capability_set_is_and_semantics() {
    let filter = NetworkFilter::builder()
        .capability(Capability::Internet)
        .capability(Capability::NotMetered)
        .build();

    assert!(filter.matches(
        Transport::Wifi,
        &[Capability::Internet, Capability::NotMetered]
    ));
    assert!(!filter.matches(Transport::Wifi, &[Capability::Internet]));
    assert!(!filter.matches(Transport::Wifi, &[]));
}

#[test]
fn extra_advertised_capabilities_are_fine() {
    let filter = NetworkFilter::builder()
        .capability(Capability::Internet)
        .build();

    assert!(filter.matches(
        Transport::Ethernet,
        &[
            Capability::Internet,
            Capability::NotMetered,
            Capability::Validated,
        ]
    ));
}

#[test]
fn duplicate_builder_calls_are_idempotent() {
    let filter = NetworkFilter::builder()
        .transport(Transport::Wifi)
        .transport(Transport::Wifi)
        .capability(Capability::Internet)
        .capability(Capability::Internet)
        .build();

    assert_eq!(filter.transports().len(), 1);
    assert_eq!(filter.capabilities().len(), 1);
}

#[test]
fn requestable_filter_validates() {
    let filter = NetworkFilter::builder()
        .transport(Transport::Wifi)
        .capability(Capability::Internet)
        .capability(Capability::NotVpn)
        .build();

    assert!(filter.validate().is_ok());
}

#[test]
fn validated_capability_is_rejected() {
    let filter = NetworkFilter::builder()
        .capability(Capability::Validated)
        .build();

    let error = filter.validate().unwrap_err();
    assert!(error.to_string().contains("validated"));
}

#[test]
fn captive_portal_capability_is_rejected() {
    let filter = NetworkFilter::builder()
        .capability(Capability::CaptivePortal)
        .build();

    assert!(filter.validate().is_err());
}

#[test]
fn filter_deserializes_from_config_json() {
    let filter: NetworkFilter = serde_json::from_str(
        r#"{"transports": ["wifi", "cellular"], "capabilities": ["internet"]}"#,
    )
    .unwrap();

    assert!(filter.matches(Transport::Wifi, &[Capability::Internet]));
    assert!(filter.matches(Transport::Cellular, &[Capability::Internet]));
    assert!(!filter.matches(Transport::Vpn, &[Capability::Internet]));
}

#[test]
fn empty_config_object_means_match_all() {
    let filter: NetworkFilter = serde_json::from_str("{}").unwrap();
    assert_eq!(filter, NetworkFilter::any());
}

#[test]
fn filter_serializes_round_trip() {
    let filter = NetworkFilter::builder()
        .transport(Transport::Ethernet)
        .capability(Capability::NotMetered)
        .build();

    let json = serde_json::to_string(&filter).unwrap();
    let parsed: NetworkFilter = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, filter);
}
