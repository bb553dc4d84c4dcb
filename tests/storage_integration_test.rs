//! Scan-then-persist flow tests
//!
//! The engine never depends on the store; these tests exercise the
//! surrounding persistence contract.

use aegis::analysis::RuleSetAnalyzer;
use aegis::domain::{DocumentId, UserId};
use aegis::scan::{ScanEngine, ScanRequest};
use aegis::storage::{ActionEntry, JsonlStore, MemoryStore, ReportStore};
use serde_json::json;
use std::sync::Arc;

async fn scan() -> aegis::domain::ComplianceReport {
    let engine = ScanEngine::new(Arc::new(RuleSetAnalyzer::new())).unwrap();
    engine
        .scan_document(ScanRequest::new(
            "Records are unencrypted. MRN 4417 on file.",
            "records.txt",
            DocumentId::new("doc-11").unwrap(),
            vec!["HIPAA".parse().unwrap()],
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn report_survives_memory_round_trip() {
    let report = scan().await;
    let store = MemoryStore::new();
    let user = UserId::new("clinician-4").unwrap();

    store.save_report(&report, &user).await.unwrap();
    store
        .log_action(&ActionEntry::new(
            "compliance_scan",
            json!({"document_id": report.document_id.to_string()}),
        ))
        .await
        .unwrap();

    let stored = store.reports().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user, user);
    assert_eq!(stored[0].report.overall_score, report.overall_score);
    assert_eq!(stored[0].report.issues.len(), report.issues.len());

    let actions = store.actions().await;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].details["document_id"], "doc-11");
}

#[tokio::test]
async fn report_serializes_to_jsonl_with_redacted_text_only() {
    let report = scan().await;
    let dir = tempfile::tempdir().unwrap();
    let store = JsonlStore::new(dir.path()).unwrap();
    let user = UserId::new("clinician-4").unwrap();

    store.save_report(&report, &user).await.unwrap();

    let content = std::fs::read_to_string(dir.path().join("reports.jsonl")).unwrap();
    assert!(content.contains("\"documentId\":\"doc-11\""));
    assert!(content.contains("[MRN_REDACTED]"));
    // The stored sanitized text must not carry the original identifier
    assert!(!content.contains("MRN 4417"));
}
