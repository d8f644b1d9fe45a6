//! Connectivity Stream: network availability as async streams.
//!
//! A library for observing "network became available" events from a
//! platform network-monitoring facility as lazy, cancellable
//! `tokio_stream::Stream`s, plus best-effort reachability probes.

pub mod facility;
pub mod observer;
pub mod probe;
