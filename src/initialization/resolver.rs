//! DNS resolution capability selection.
//!
//! Picks one of the two [`DnsLookup`] implementations at construction time
//! based on configuration. Both honor the same default-on-failure contract,
//! so the rest of the engine is indifferent to the choice.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::probes::{DnsLookup, HickoryDns, SystemDns};

/// Initializes the DNS resolution capability for the engine.
///
/// Defaults to hickory-resolver with fail-fast options; configuration can
/// select the OS resolver instead for environments where direct upstream
/// queries are blocked.
pub fn init_resolver(config: &EngineConfig) -> Arc<dyn DnsLookup> {
    if config.use_system_dns {
        log::debug!("Using system DNS resolver");
        Arc::new(SystemDns)
    } else {
        log::debug!("Using hickory DNS resolver");
        Arc::new(HickoryDns::new(config.timeouts.dns()))
    }
}
