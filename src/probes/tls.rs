//! TLS reachability probe.
//!
//! Attempts a TCP connection to `host:443` followed by a rustls handshake
//! validated against the webpki root store. Reports a boolean: absence of TLS
//! is a weak risk signal, not proof of phishing, so the probe degrades to
//! `false` on any failure.

use std::sync::Arc;

use anyhow::Result;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::ProbeTimeouts;

use super::ProbeOutcome;

/// Checks whether `host` answers a secure connection on port 443.
///
/// Degrades to `false` on connect failure, handshake failure, or timeout of
/// either phase.
pub async fn check_tls_reachability(host: &str, timeouts: &ProbeTimeouts) -> ProbeOutcome<bool> {
    match try_handshake(host, timeouts).await {
        Ok(()) => ProbeOutcome::Success(true),
        Err(e) => ProbeOutcome::degraded(false, e.to_string()),
    }
}

async fn try_handshake(host: &str, timeouts: &ProbeTimeouts) -> Result<()> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| anyhow::anyhow!("invalid server name {}: {}", host, e))?;

    let sock = tokio::time::timeout(
        timeouts.tcp_connect(),
        TcpStream::connect((host.to_string(), 443)),
    )
    .await
    .map_err(|_| anyhow::anyhow!("TCP connect timeout for {}:443", host))?
    .map_err(|e| anyhow::anyhow!("TCP connect failed for {}:443: {}", host, e))?;

    let connector = TlsConnector::from(Arc::new(config));
    tokio::time::timeout(timeouts.tls_handshake(), connector.connect(server_name, sock))
        .await
        .map_err(|_| anyhow::anyhow!("TLS handshake timeout for {}", host))?
        .map_err(|e| anyhow::anyhow!("TLS handshake failed for {}: {}", host, e))?;

    Ok(())
}
