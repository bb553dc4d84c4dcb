//! End-to-end scan engine tests
//!
//! Covers the full sanitize-analyze-merge pipeline with injected
//! analyzers and a deterministic id source.

use aegis::analysis::{Analyzer, RuleSetAnalyzer, StandardAnalysis};
use aegis::domain::{
    AegisError, AnalysisError, DocumentId, Finding, Severity, Standard,
};
use aegis::sanitize::{PatternRegistry, Redactor};
use aegis::scan::{ScanEngine, ScanRequest, SequentialIdGenerator};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

fn engine_with(analyzer: Arc<dyn Analyzer>) -> ScanEngine {
    ScanEngine::new(analyzer)
        .unwrap()
        .with_id_generator(Arc::new(SequentialIdGenerator::new()))
}

fn local_engine() -> ScanEngine {
    engine_with(Arc::new(RuleSetAnalyzer::new()))
}

fn request(text: &str, standards: Vec<Standard>) -> ScanRequest {
    ScanRequest::new(
        text,
        "test.txt",
        DocumentId::new("doc-1").unwrap(),
        standards,
    )
}

/// Analyzer that fails for one standard and delegates for the rest
struct FailingFor {
    inner: RuleSetAnalyzer,
    fails: Standard,
}

#[async_trait]
impl Analyzer for FailingFor {
    async fn analyze(
        &self,
        sanitized_text: &str,
        standard: &Standard,
    ) -> Result<StandardAnalysis, AnalysisError> {
        if *standard == self.fails {
            return Err(AnalysisError::RequestFailed("connection refused".to_string()));
        }
        self.inner.analyze(sanitized_text, standard).await
    }

    fn name(&self) -> &'static str {
        "failing-for"
    }
}

/// Analyzer returning a fixed score per standard, with an optional delay
/// to shuffle completion order
struct StubAnalyzer;

#[async_trait]
impl Analyzer for StubAnalyzer {
    async fn analyze(
        &self,
        _sanitized_text: &str,
        standard: &Standard,
    ) -> Result<StandardAnalysis, AnalysisError> {
        // The first requested standard sleeps so it finishes last
        let (score, delay_ms) = match standard {
            Standard::Gdpr => (70, 60),
            Standard::Hipaa => (85, 0),
            _ => (100, 0),
        };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        Ok(StandardAnalysis {
            score,
            findings: vec![Finding::new(
                Severity::Warning,
                format!("{standard} finding"),
                "stub",
                format!("{standard} suggestion"),
            )],
            recommendations: vec![
                format!("{standard} suggestion"),
                "Shared recommendation".to_string(),
            ],
        })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

#[tokio::test]
async fn scenario_unencrypted_shared_credentials() {
    let report = local_engine()
        .scan_document(request(
            "Patient data is unencrypted and password is shared among staff.",
            vec![Standard::Hipaa],
        ))
        .await
        .unwrap();

    let criticals = report.severity_counts().critical;
    assert_eq!(criticals, 2);
    assert!(report.overall_score < 80);
    assert_eq!(report.overall_score, 70);
    assert!(report.issues.iter().any(|i| i.title == "Missing Encryption"));
}

#[tokio::test]
async fn scenario_empty_document() {
    let report = local_engine()
        .scan_document(request("", vec![Standard::Hipaa, Standard::Gdpr]))
        .await
        .unwrap();

    assert_eq!(report.overall_score, 100);
    assert!(report.issues.is_empty());
    assert!(report
        .summary
        .contains("Found 0 critical, 0 warning, and 0 informational issues."));
}

#[tokio::test]
async fn scenario_failing_analyzer_degrades_to_fallback() {
    let engine = engine_with(Arc::new(FailingFor {
        inner: RuleSetAnalyzer::new(),
        fails: Standard::Gdpr,
    }));

    // "data" and "privacy" are GDPR fallback keywords
    let report = engine
        .scan_document(request(
            "data privacy practices are unencrypted",
            vec![Standard::Hipaa, Standard::Gdpr],
        ))
        .await
        .unwrap();

    // No error propagated; HIPAA ran the rule table, GDPR the fallback.
    let hipaa: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.category == Standard::Hipaa)
        .collect();
    let gdpr: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.category == Standard::Gdpr)
        .collect();

    assert!(hipaa.iter().any(|i| i.title == "Missing Encryption"));
    assert!(gdpr.iter().all(|i| i.severity == Severity::Info));
    assert!(gdpr.iter().any(|i| i.title == "Contains data references"));
    assert!(report
        .recommendations
        .contains(&"Review document manually for compliance issues".to_string()));
}

#[tokio::test]
async fn issue_order_follows_request_not_completion() {
    let engine = engine_with(Arc::new(StubAnalyzer));

    // GDPR requested first and finishes last; its issues still lead.
    let report = engine
        .scan_document(request("text", vec![Standard::Gdpr, Standard::Hipaa]))
        .await
        .unwrap();

    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.issues[0].category, Standard::Gdpr);
    assert_eq!(report.issues[1].category, Standard::Hipaa);
}

#[tokio::test]
async fn overall_score_is_rounded_mean() {
    let engine = engine_with(Arc::new(StubAnalyzer));

    let report = engine
        .scan_document(request("text", vec![Standard::Gdpr, Standard::Hipaa]))
        .await
        .unwrap();

    // mean(70, 85) = 77.5 -> 78
    assert_eq!(report.overall_score, 78);
}

#[tokio::test]
async fn recommendations_deduplicate_first_seen() {
    let engine = engine_with(Arc::new(StubAnalyzer));

    let report = engine
        .scan_document(request("text", vec![Standard::Gdpr, Standard::Hipaa]))
        .await
        .unwrap();

    let shared: Vec<_> = report
        .recommendations
        .iter()
        .filter(|r| *r == "Shared recommendation")
        .collect();
    assert_eq!(shared.len(), 1);

    // First-seen order: GDPR's own suggestion, the shared one, then HIPAA's
    assert_eq!(
        report.recommendations,
        vec![
            "GDPR suggestion".to_string(),
            "Shared recommendation".to_string(),
            "HIPAA suggestion".to_string(),
        ]
    );
}

#[tokio::test]
async fn duplicate_recommendations_within_local_backend() {
    // Two standards run the same rule table over the same text, producing
    // identical suggestions; the report carries each exactly once.
    let report = local_engine()
        .scan_document(request(
            "records are unencrypted",
            vec![Standard::Hipaa, Standard::Gdpr],
        ))
        .await
        .unwrap();

    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.recommendations.len(), 1);
}

#[tokio::test]
async fn sequential_ids_are_stable_and_unique() {
    let report = local_engine()
        .scan_document(request(
            "records are unencrypted",
            vec![Standard::Hipaa, Standard::Gdpr],
        ))
        .await
        .unwrap();

    let ids: Vec<&str> = report.issues.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["doc-1-HIPAA-0001", "doc-1-GDPR-0002"]);
}

#[tokio::test]
async fn sanitization_failure_aborts_scan() {
    // A pattern whose placeholder still matches its own regex leaves the
    // match count unchanged, which the validator must treat as a leak.
    let registry = PatternRegistry::from_toml(
        r#"
        [[patterns]]
        name = "badge"
        regex = '(?i)\bbadge-\d{4}\b'
        placeholder = "[BADGE-0000]"
        risk = "none"
        "#,
    )
    .unwrap();

    let engine = local_engine().with_redactor(Redactor::with_registry(registry));

    let err = engine
        .scan_document(request("employee badge-1234 on file", vec![Standard::Hipaa]))
        .await
        .unwrap_err();

    assert!(err.is_sanitization_failure());
    match err {
        AegisError::Sanitization(inner) => {
            assert!(inner.to_string().contains("badge"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn analysis_runs_on_sanitized_text() {
    // The identifier is redacted before the fallback scans the text, so a
    // keyword living only inside the PHI span is never seen.
    let engine = engine_with(Arc::new(FailingFor {
        inner: RuleSetAnalyzer::new(),
        fails: Standard::Gdpr,
    }));

    let report = engine
        .scan_document(request("consent@example.org", vec![Standard::Gdpr]))
        .await
        .unwrap();

    assert_eq!(
        report.sanitization_result.sanitized_text,
        "[EMAIL_REDACTED]"
    );
    assert!(report.issues.is_empty(), "{:?}", report.issues);
    assert_eq!(report.overall_score, 100);
}

#[tokio::test]
async fn custom_standard_round_trips() {
    let engine = local_engine();
    let report = engine
        .scan_document(request(
            "records are unencrypted",
            vec![Standard::Custom("SOC2".to_string())],
        ))
        .await
        .unwrap();

    assert_eq!(report.issues.len(), 1);
    assert_eq!(
        report.issues[0].category,
        Standard::Custom("SOC2".to_string())
    );
    assert!(report.summary.starts_with("Document analyzed for SOC2 compliance."));
}
