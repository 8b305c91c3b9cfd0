//! Connection management for NNTP client
//!
//! This module handles TCP/TLS connection establishment, server greeting
//! validation, and session shutdown.

use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use crate::commands;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tokio_rustls::rustls::client::danger::{
    HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
};
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use tokio_rustls::rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use tracing::{debug, warn};

use super::NntpClient;
use super::state::ConnectionState;

/// Byte stream an [`NntpClient`] can run a session over
///
/// Implemented for every `AsyncRead + AsyncWrite` type, so plain TCP, TLS,
/// and in-memory streams all qualify.
pub trait NntpIo: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T> NntpIo for T where T: AsyncRead + AsyncWrite + Send + Unpin {}

/// BufReader capacity for article downloads (64KB)
const BUFREADER_CAPACITY: usize = 64 * 1024;

/// Dangerous certificate verifier that accepts all certificates
///
/// **Security Warning:** This verifier disables all certificate validation,
/// making connections vulnerable to man-in-the-middle attacks. It is used
/// for TLS sessions unless the configuration opts into verification.
#[derive(Debug)]
pub(super) struct DangerousAcceptAnyCertificate;

impl ServerCertVerifier for DangerousAcceptAnyCertificate {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, tokio_rustls::rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Build the rustls client configuration for a server
fn tls_client_config(config: &ServerConfig) -> ClientConfig {
    use tokio_rustls::rustls::crypto::{CryptoProvider, ring};
    let _ = CryptoProvider::install_default(ring::default_provider());

    if config.allow_insecure_tls {
        warn!("TLS certificate validation disabled - connection vulnerable to MITM attacks");
        ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(DangerousAcceptAnyCertificate))
            .with_no_client_auth()
    } else {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth()
    }
}

impl NntpClient {
    /// Connect to an NNTP server and read its greeting
    ///
    /// Opens a TCP connection to `host:port`, wraps it in TLS when
    /// [`ServerConfig::tls`] is set, and validates the greeting line.
    /// Does not authenticate - call [`authenticate`](Self::authenticate) after connecting.
    ///
    /// No retry is attempted; any failure is returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Connect`] - TCP connection fails (DNS resolution, refusal, unreachable)
    /// - [`NntpError::Tls`] - TLS handshake fails
    /// - [`NntpError::Protocol`] - Server greeting is not 2xx
    /// - [`NntpError::ConnectionClosed`] - Server hung up before greeting
    pub async fn connect(config: &ServerConfig) -> Result<Self> {
        let address = config.address();
        debug!("Connecting to NNTP server {}", address);

        let tcp_stream = TcpStream::connect(&address)
            .await
            .map_err(|source| NntpError::Connect {
                address: address.clone(),
                source,
            })?;

        // Commands are small request/response exchanges
        if let Err(e) = tcp_stream.set_nodelay(true) {
            warn!("Failed to set TCP_NODELAY: {}", e);
        }

        let stream: Box<dyn NntpIo> = if config.tls {
            let connector = TlsConnector::from(Arc::new(tls_client_config(config)));
            let server_name = ServerName::try_from(config.host.as_str())
                .map_err(|e| NntpError::Tls(format!("Invalid domain: {}", e)))?
                .to_owned();

            let tls_stream = connector
                .connect(server_name, tcp_stream)
                .await
                .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {}", e)))?;
            Box::new(tls_stream)
        } else {
            Box::new(tcp_stream)
        };

        let mut client = Self::from_boxed(stream);
        client.read_greeting().await?;
        Ok(client)
    }

    /// Wrap an already-established stream without reading a greeting
    ///
    /// Useful for tunnels and in-memory transports. Call
    /// [`read_greeting`](Self::read_greeting) before issuing commands if the
    /// peer sends one.
    pub fn from_stream<S: NntpIo + 'static>(stream: S) -> Self {
        Self::from_boxed(Box::new(stream))
    }

    fn from_boxed(stream: Box<dyn NntpIo>) -> Self {
        Self {
            stream: BufReader::with_capacity(BUFREADER_CAPACITY, stream),
            state: ConnectionState::Ready,
            current_group: None,
        }
    }

    /// Read and validate the server greeting (200 or 201)
    ///
    /// # Errors
    ///
    /// Returns [`NntpError::Protocol`] if the greeting is not a 2xx status.
    pub async fn read_greeting(&mut self) -> Result<NntpResponse> {
        let greeting = self.read_status().await?;
        debug!("Server greeting: {} {}", greeting.code, greeting.message);

        if !greeting.is_success() {
            return Err(NntpError::Protocol {
                code: greeting.code,
                message: greeting.message,
            });
        }
        Ok(greeting)
    }

    /// Send QUIT and read the server's reply
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be written or the reply cannot be read.
    pub async fn quit(&mut self) -> Result<()> {
        debug!("Closing NNTP connection");

        self.send_command(commands::quit()).await?;
        self.state = ConnectionState::Closed;
        let _reply = self.read_line().await?;
        Ok(())
    }

    /// End the session: QUIT (best-effort), then shut the stream down
    ///
    /// Errors are logged and otherwise ignored; the connection is released
    /// when this returns.
    pub async fn close(mut self) {
        if let Err(e) = self.quit().await {
            debug!("QUIT failed, closing anyway: {}", e);
        }
        if let Err(e) = self.stream.get_mut().shutdown().await {
            debug!("Stream shutdown failed: {}", e);
        }
    }
}
