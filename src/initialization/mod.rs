//! Engine resource initialization.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP clients (default and redirect-disabled)
//! - DNS resolution capability
//! - TLD extractor
//! - Logger and crypto provider
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use rustls::crypto::{ring::default_provider, CryptoProvider};
use tldextract::{TldExtractor, TldOption};
use tokio::sync::Semaphore;

pub use client::{init_client, init_redirect_client};
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes a semaphore for bounding batch-scan concurrency.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}

/// Initializes the Public Suffix List extractor used for registrable-domain
/// extraction.
pub fn init_extractor() -> Arc<TldExtractor> {
    Arc::new(TldOption::default().build())
}

/// Initializes the crypto provider for TLS operations.
///
/// Must be called before any TLS connection is established. Reinstalling is
/// harmless, so the result is ignored.
pub fn init_crypto_provider() {
    let _ = CryptoProvider::install_default(default_provider());
}
