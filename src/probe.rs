//! Best-effort host reachability probes.
//!
//! A network becoming available says nothing about whether traffic
//! actually flows. These probes give callers a cheap follow-up check:
//! name resolution and TCP connectability, both async and bounded.
//! Results are booleans, not errors; any failure means "not reachable".

use std::time::Duration;

use tokio::net::{TcpStream, lookup_host};

/// Returns true if `host` resolves to at least one address.
///
/// Uses the system resolver. A resolution failure of any kind (including
/// no resolver being reachable) yields `false`.
pub async fn is_resolvable(host: &str) -> bool {
    match lookup_host((host, 0u16)).await {
        Ok(mut addresses) => addresses.next().is_some(),
        Err(error) => {
            tracing::trace!(host, %error, "resolution probe failed");
            false
        }
    }
}

/// Returns true if a TCP connection to `host:port` succeeds within
/// `timeout`.
///
/// The connection is closed immediately; only establishment is measured.
pub async fn is_connectable(host: &str, port: u16, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(error)) => {
            tracing::trace!(host, port, %error, "connect probe failed");
            false
        }
        Err(_elapsed) => {
            tracing::trace!(host, port, "connect probe timed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn localhost_is_resolvable() {
        assert!(is_resolvable("localhost").await);
    }

    #[tokio::test]
    async fn reserved_invalid_tld_is_not_resolvable() {
        // RFC 2606 reserves .invalid; resolution always fails.
        assert!(!is_resolvable("host.invalid").await);
    }

    #[tokio::test]
    async fn local_listener_is_connectable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(is_connectable("127.0.0.1", port, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn closed_port_is_not_connectable() {
        // Bind then drop to find a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        assert!(!is_connectable("127.0.0.1", port, Duration::from_millis(500)).await);
    }
}
