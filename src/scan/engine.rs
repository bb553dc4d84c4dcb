//! Scan engine
//!
//! This module provides the core [`ScanEngine`] that orchestrates
//! sanitization, per-standard analysis, and report synthesis.
//!
//! # Pipeline
//!
//! The synthesis path is strictly linear:
//!
//! 1. **Sanitize** the raw text and validate that redaction held. A
//!    validation failure aborts the scan; it is the only fatal error.
//! 2. **Analyze** the sanitized text once per requested standard. The
//!    analyses fan out concurrently; a failing or unparseable analysis is
//!    replaced by the deterministic keyword fallback for that standard
//!    and never surfaces to the caller.
//! 3. **Merge** results in request order (never completion order),
//!    assigning each issue a unique id as it is appended.
//! 4. **Score**: the overall score is the rounded mean of the per-standard
//!    scores.
//! 5. **Summarize** and deduplicate recommendations, first-seen order.
//!
//! # Examples
//!
//! ```no_run
//! use aegis::analysis::RuleSetAnalyzer;
//! use aegis::scan::{ScanEngine, ScanRequest};
//! use aegis::domain::DocumentId;
//! use std::sync::Arc;
//!
//! # async fn example() -> aegis::domain::Result<()> {
//! let engine = ScanEngine::new(Arc::new(RuleSetAnalyzer::new()))?;
//!
//! let request = ScanRequest::new(
//!     "Patient data is stored unencrypted.",
//!     "intake.txt",
//!     DocumentId::new("doc-1").map_err(aegis::domain::AegisError::Validation)?,
//!     vec!["HIPAA".parse().unwrap(), "GDPR".parse().unwrap()],
//! );
//!
//! let report = engine.scan_document(request).await?;
//! println!("score: {}", report.overall_score);
//! # Ok(())
//! # }
//! ```

use crate::analysis::{fallback, Analyzer, RemoteAnalyzer, RuleSetAnalyzer, StandardAnalysis};
use crate::audit::AuditLogger;
use crate::config::{AegisConfig, AnalyzerBackend};
use crate::domain::{
    AegisError, ComplianceIssue, ComplianceReport, DocumentId, Result, SeverityCounts, Standard,
};
use crate::sanitize::{verify_sanitization, PatternRegistry, Redactor};
use crate::scan::idgen::{IdGenerator, RandomIdGenerator};
use crate::scan::summary::build_summary;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// A single scan request
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Raw document text
    pub text: String,
    /// Display name of the document
    pub file_name: String,
    /// Caller-assigned document identifier
    pub document_id: DocumentId,
    /// Standards to analyze against, in the order the report should carry
    /// their issues; must be non-empty
    pub standards: Vec<Standard>,
}

impl ScanRequest {
    /// Create a scan request
    pub fn new(
        text: impl Into<String>,
        file_name: impl Into<String>,
        document_id: DocumentId,
        standards: Vec<Standard>,
    ) -> Self {
        Self {
            text: text.into(),
            file_name: file_name.into(),
            document_id,
            standards,
        }
    }
}

/// Compliance scan engine
///
/// Orchestrates sanitization, per-standard analysis, and report synthesis.
///
/// # Thread Safety
///
/// The engine is thread-safe and can be shared across async tasks using
/// `Arc`; the analyzer and id generator are injected trait objects.
pub struct ScanEngine {
    redactor: Redactor,
    analyzer: Arc<dyn Analyzer>,
    id_generator: Arc<dyn IdGenerator>,
    audit_logger: Option<AuditLogger>,
}

impl ScanEngine {
    /// Create an engine with the given analyzer and default collaborators
    ///
    /// Uses the built-in pattern catalog, the random id generator, and no
    /// audit logging.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        let redactor = Redactor::new()
            .map_err(|e| AegisError::Configuration(format!("Failed to build redactor: {e}")))?;

        Ok(Self {
            redactor,
            analyzer,
            id_generator: Arc::new(RandomIdGenerator),
            audit_logger: None,
        })
    }

    /// Create an engine from configuration
    ///
    /// Selects the analyzer backend, pattern library, and audit logger the
    /// configuration names.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern library cannot be loaded, the remote
    /// analyzer cannot be built, or the audit logger cannot be created.
    pub fn from_config(config: &AegisConfig) -> Result<Self> {
        let analyzer: Arc<dyn Analyzer> = match config.analysis.backend {
            AnalyzerBackend::Local => Arc::new(RuleSetAnalyzer::new()),
            AnalyzerBackend::Remote => {
                let remote = config.analysis.remote.as_ref().ok_or_else(|| {
                    AegisError::Configuration(
                        "analysis.remote configuration is required when backend = 'remote'"
                            .to_string(),
                    )
                })?;
                Arc::new(RemoteAnalyzer::new(remote)?)
            }
        };

        let redactor = match &config.sanitization.pattern_library {
            Some(path) => {
                let registry = PatternRegistry::from_file(path).map_err(|e| {
                    AegisError::Configuration(format!("Failed to load pattern library: {e}"))
                })?;
                Redactor::with_registry(registry)
            }
            None => Redactor::new()
                .map_err(|e| AegisError::Configuration(format!("Failed to build redactor: {e}")))?,
        };

        let audit_logger = if config.audit.enabled {
            Some(
                AuditLogger::from_config(&config.audit)
                    .map_err(|e| AegisError::Audit(e.to_string()))?,
            )
        } else {
            None
        };

        Ok(Self {
            redactor,
            analyzer,
            id_generator: Arc::new(RandomIdGenerator),
            audit_logger,
        })
    }

    /// Replace the redactor
    pub fn with_redactor(mut self, redactor: Redactor) -> Self {
        self.redactor = redactor;
        self
    }

    /// Replace the id generator
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Attach an audit logger
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    /// The redactor this engine runs
    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Scan a document and synthesize a compliance report
    ///
    /// # Errors
    ///
    /// Returns [`AegisError::Validation`] when no standards are requested
    /// and [`AegisError::Sanitization`] when redaction could not be
    /// verified. Per-standard analyzer failures are absorbed by the
    /// keyword fallback and never propagate.
    pub async fn scan_document(&self, request: ScanRequest) -> Result<ComplianceReport> {
        if request.standards.is_empty() {
            return Err(AegisError::Validation(
                "at least one standard must be requested".to_string(),
            ));
        }

        let start = Instant::now();

        // Step 1: sanitize, then prove the redaction held before any text
        // leaves this process.
        let sanitization = self.redactor.sanitize(&request.text);
        verify_sanitization(
            self.redactor.registry(),
            &request.text,
            &sanitization.sanitized_text,
        )
        .map_err(|e| {
            tracing::error!(
                document_id = %request.document_id,
                error = %e,
                "sanitization could not be verified, aborting scan"
            );
            AegisError::Sanitization(e)
        })?;

        // Step 2: fan out one analysis per standard. join_all resolves in
        // input order, so request order survives regardless of completion
        // order. A failed analysis degrades to the keyword fallback.
        let sanitized_text = sanitization.sanitized_text.as_str();
        let analyses: Vec<StandardAnalysis> =
            futures::future::join_all(request.standards.iter().map(|standard| {
                let analyzer = Arc::clone(&self.analyzer);
                async move {
                    match analyzer.analyze(sanitized_text, standard).await {
                        Ok(analysis) => analysis,
                        Err(e) => {
                            tracing::warn!(
                                standard = %standard,
                                backend = analyzer.name(),
                                error = %e,
                                "analysis failed, substituting keyword fallback"
                            );
                            fallback::keyword_fallback(sanitized_text, standard)
                        }
                    }
                }
            }))
            .await;

        // Steps 3-5: merge per-standard results in request order.
        let mut issues: Vec<ComplianceIssue> = Vec::new();
        let mut scores: Vec<u8> = Vec::new();
        let mut recommendations: Vec<String> = Vec::new();
        let mut seen_recommendations: HashSet<String> = HashSet::new();

        for (standard, analysis) in request.standards.iter().zip(analyses) {
            scores.push(analysis.score);

            for finding in analysis.findings {
                let id = self.id_generator.issue_id(&request.document_id, standard);
                issues.push(ComplianceIssue::from_finding(finding, standard.clone(), id));
            }

            for recommendation in analysis.recommendations {
                if seen_recommendations.insert(recommendation.clone()) {
                    recommendations.push(recommendation);
                }
            }
        }

        let overall_score = if scores.is_empty() {
            0
        } else {
            let mean = scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64;
            mean.round() as u8
        };

        let counts = SeverityCounts::tally(&issues);
        let summary = build_summary(&request.standards, overall_score, &counts);

        let report = ComplianceReport {
            document_id: request.document_id.clone(),
            file_name: request.file_name.clone(),
            timestamp: Utc::now(),
            overall_score,
            issues,
            sanitization_result: sanitization,
            summary,
            recommendations,
        };

        // The audit trail is best-effort; a full report always goes back
        // to the caller.
        if let Some(ref logger) = self.audit_logger {
            if let Err(e) = logger.log_scan(&report, &request.standards, &request.text) {
                tracing::warn!(error = %e, "failed to write scan audit entry");
            }
        }

        tracing::debug!(
            document_id = %request.document_id,
            standards = request.standards.len(),
            issues = report.issues.len(),
            score = report.overall_score,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );

        Ok(report)
    }
}
