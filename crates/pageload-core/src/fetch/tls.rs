//! TLS client side for `https:` loads.
//!
//! Uses rustls with the Mozilla root certificates from webpki-roots; no
//! pinning or custom trust.

use rustls::pki_types::ServerName;
use std::io;
use std::net::TcpStream;
use std::sync::{Arc, OnceLock};

use crate::error::LoadError;

/// Client TLS stream over a plain TCP connection.
pub(crate) type TlsStream = rustls::StreamOwned<rustls::ClientConnection, TcpStream>;

static CLIENT_CONFIG: OnceLock<Arc<rustls::ClientConfig>> = OnceLock::new();

/// Shared, immutable client config. Built on first use.
fn client_config() -> Arc<rustls::ClientConfig> {
    CLIENT_CONFIG
        .get_or_init(|| {
            let mut root_store = rustls::RootCertStore::empty();
            root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            Arc::new(
                rustls::ClientConfig::builder()
                    .with_root_certificates(root_store)
                    .with_no_client_auth(),
            )
        })
        .clone()
}

/// Runs the client handshake to completion over `tcp` with the default trust
/// store, using `host` for SNI and certificate verification.
pub(crate) fn handshake(tcp: TcpStream, host: &str) -> Result<TlsStream, LoadError> {
    handshake_with(client_config(), tcp, host)
}

pub(crate) fn handshake_with(
    config: Arc<rustls::ClientConfig>,
    mut tcp: TcpStream,
    host: &str,
) -> Result<TlsStream, LoadError> {
    let fail = |source: io::Error| LoadError::TlsHandshake {
        host: host.to_string(),
        source,
    };

    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| fail(io::Error::new(io::ErrorKind::InvalidInput, e)))?;
    let mut conn = rustls::ClientConnection::new(config, server_name)
        .map_err(|e| fail(io::Error::other(e)))?;

    while conn.is_handshaking() {
        conn.complete_io(&mut tcp).map_err(&fail)?;
    }
    tracing::debug!(
        "TLS handshake with {} complete ({:?})",
        host,
        conn.protocol_version()
    );

    Ok(rustls::StreamOwned::new(conn, tcp))
}
