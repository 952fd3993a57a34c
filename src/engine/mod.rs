//! The URL risk-scoring engine.
//!
//! [`ScanEngine`] is an explicitly constructed instance owning its
//! configuration and network resources; it is passed to request handlers
//! rather than held as global state. The engine keeps no state across
//! requests — every scan builds its feature record fresh and hands the
//! assessment back to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tldextract::TldExtractor;

use crate::allowlist::Allowlist;
use crate::app::url::{normalize_url, NormalizedUrl};
use crate::config::EngineConfig;
use crate::content::analyze_page_content;
use crate::domain::extract_registrable_domain;
use crate::error_handling::{
    ErrorType, InfoType, InitializationError, ProcessingStats, ScanError,
};
use crate::initialization::{
    init_client, init_extractor, init_redirect_client, init_resolver, init_semaphore,
};
use crate::models::{
    AnalysisBreakdown, DomainAnalysis, FeatureRecord, RiskAssessment, RiskStatus, SecurityChecks,
    UrlAnalysis,
};
use crate::probes::{collect_signals, DnsLookup, NetworkSignals, SignalContext};
use crate::scoring::{classify, score_features};
use crate::structural::{analyze, StructuralReport};

/// The scoring engine. Construct once, share via `Arc`, scan many URLs.
pub struct ScanEngine {
    config: EngineConfig,
    client: Arc<reqwest::Client>,
    redirect_client: Arc<reqwest::Client>,
    dns: Arc<dyn DnsLookup>,
    extractor: Arc<TldExtractor>,
    allowlist: Allowlist,
    stats: Arc<ProcessingStats>,
}

impl ScanEngine {
    /// Builds an engine from configuration, initializing HTTP clients and the
    /// DNS resolution capability.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError`] if an HTTP client cannot be built.
    pub fn new(config: EngineConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        let redirect_client = init_redirect_client(&config)?;
        let dns = init_resolver(&config);
        let extractor = init_extractor();
        let allowlist = Allowlist::new(&config.allowlist_domains);

        Ok(Self {
            config,
            client,
            redirect_client,
            dns,
            extractor,
            allowlist,
            stats: Arc::new(ProcessingStats::new()),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Processing statistics accumulated across scans.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Scans one URL and returns its risk assessment.
    ///
    /// The pipeline: normalize → allowlist short-circuit → structural
    /// analysis + concurrent network probes → aggregate → score. When
    /// `scan_content` is set, the page body is additionally fetched and
    /// analyzed; that result is reported alongside the score, not merged
    /// into it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidUrl`] for input that cannot be normalized
    /// into a well-formed http(s) URL. Probe failures never error: each
    /// collector degrades to its documented default.
    pub async fn scan(
        &self,
        raw_url: &str,
        scan_content: bool,
    ) -> Result<RiskAssessment, ScanError> {
        let normalized = match normalize_url(raw_url) {
            Ok(normalized) => normalized,
            Err(e) => {
                self.stats.increment_error(ErrorType::InvalidUrl);
                return Err(e);
            }
        };

        // The normalizer already parsed this; a second failure is impossible
        // for the same input, but stay on the error path rather than panic.
        let parsed = url::Url::parse(&normalized.url)
            .map_err(|e| ScanError::InvalidUrl(format!("{raw_url}: {e}")))?;

        if self.allowlist.matches(&normalized.host) {
            log::debug!("Allowlist short-circuit for {}", normalized.host);
            self.stats.increment_info(InfoType::AllowlistShortCircuit);
            return Ok(allowlisted_assessment(&normalized, &parsed));
        }

        let structural = analyze(&normalized.url, &parsed, &self.config.suspicious_words);

        let registrable_domain =
            match extract_registrable_domain(&self.extractor, &normalized.url) {
                Ok(domain) => Some(domain),
                Err(e) => {
                    log::debug!("No registrable domain for {}: {}", normalized.host, e);
                    None
                }
            };

        let ctx = SignalContext {
            client: &self.client,
            redirect_client: &self.redirect_client,
            dns: self.dns.as_ref(),
            config: &self.config,
            stats: &self.stats,
        };
        let signals = collect_signals(
            &ctx,
            &normalized.url,
            &normalized.host,
            registrable_domain.as_deref(),
        )
        .await;

        let features = aggregate_features(&structural, signals);
        let risk_score = score_features(&features, &self.config.weights);
        let status = classify(risk_score, &self.config.thresholds);

        let content_analysis = if scan_content {
            let analysis = analyze_page_content(&self.client, &normalized.url).await;
            if analysis.error.is_some() {
                self.stats.increment_error(ErrorType::ContentFetchError);
            }
            Some(analysis)
        } else {
            None
        };

        log::info!(
            "Scanned {}: status={} score={:.2}",
            normalized.host,
            status,
            risk_score
        );

        Ok(RiskAssessment {
            status,
            risk_score,
            analysis: build_breakdown(&features, &structural),
            features,
            content_analysis,
        })
    }

    /// Scans multiple URLs independently.
    ///
    /// Each URL runs its own pipeline; a failure in one never affects the
    /// others. Parallelism is bounded by the configured concurrency limit.
    pub async fn scan_batch(
        &self,
        urls: &[String],
    ) -> HashMap<String, Result<RiskAssessment, ScanError>> {
        let semaphore = init_semaphore(self.config.max_concurrency);

        let futures = urls.iter().map(|url| {
            let semaphore = Arc::clone(&semaphore);
            async move {
                let result = match semaphore.acquire().await {
                    Ok(_permit) => self.scan(url, false).await,
                    Err(_) => Err(ScanError::InvalidUrl(format!(
                        "{url}: scan pool closed"
                    ))),
                };
                (url.clone(), result)
            }
        });

        join_all(futures).await.into_iter().collect()
    }
}

/// Merges structural output and network signals into one feature record.
///
/// Each source owns disjoint fields, so no conflict resolution is needed;
/// degraded probes contribute their documented defaults.
fn aggregate_features(structural: &StructuralReport, signals: NetworkSignals) -> FeatureRecord {
    FeatureRecord {
        url_length: structural.url_length,
        dots_count: structural.dots_count,
        numeric_chars: structural.numeric_chars,
        special_chars: structural.special_chars,
        suspicious_words: structural.suspicious_words,
        shortened_url: signals.shortened_url,
        redirect_count: signals.redirect_count.into_value(),
        has_dns_record: signals.has_dns_record.into_value(),
        domain_age_days: signals.domain_age_days.into_value(),
        has_ssl: signals.has_ssl.into_value(),
        blacklisted_ip: signals.blacklisted_ip.into_value(),
    }
}

/// Builds the presentation breakdown from the aggregated record.
fn build_breakdown(features: &FeatureRecord, structural: &StructuralReport) -> AnalysisBreakdown {
    AnalysisBreakdown {
        url_analysis: UrlAnalysis {
            length: features.url_length,
            dots: features.dots_count,
            numbers: features.numeric_chars,
            special_chars: features.special_chars,
            subdomain_count: structural.subdomain_count,
            path_depth: structural.path_depth,
            has_port: structural.has_port,
            has_credentials: structural.has_credentials,
            suspicious_patterns: structural.suspicious_patterns.clone(),
        },
        domain_analysis: DomainAnalysis {
            age_days: features.domain_age_days,
            has_dns: features.has_dns_record,
            has_ssl: features.has_ssl,
        },
        security_checks: SecurityChecks {
            is_shortened: features.shortened_url,
            redirect_count: features.redirect_count,
            blacklisted: features.blacklisted_ip,
        },
    }
}

/// Assessment for an allowlisted host: status safe, score zero, conservative
/// placeholder features, no probing.
fn allowlisted_assessment(normalized: &NormalizedUrl, parsed: &url::Url) -> RiskAssessment {
    let features = Allowlist::placeholder_features(&normalized.url);

    let host = parsed.host_str().unwrap_or("");
    let url_analysis = UrlAnalysis {
        length: features.url_length,
        dots: features.dots_count,
        numbers: features.numeric_chars,
        special_chars: features.special_chars,
        subdomain_count: host.split('.').count().saturating_sub(2) as u32,
        path_depth: parsed
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .count() as u32,
        has_port: parsed.port().is_some(),
        has_credentials: !parsed.username().is_empty() || parsed.password().is_some(),
        suspicious_patterns: Vec::new(),
    };

    RiskAssessment {
        status: RiskStatus::Safe,
        risk_score: 0.0,
        analysis: AnalysisBreakdown {
            url_analysis,
            domain_analysis: DomainAnalysis {
                age_days: features.domain_age_days,
                has_dns: features.has_dns_record,
                has_ssl: features.has_ssl,
            },
            security_checks: SecurityChecks {
                is_shortened: features.shortened_url,
                redirect_count: features.redirect_count,
                blacklisted: features.blacklisted_ip,
            },
        },
        features,
        content_analysis: None,
    }
}
