use synjar_core::document::{
    ContentType, Document, DocumentRecord, FileMetadata, NewDocument, ProcessingStatus,
    VerificationStatus, WorkspaceId,
};

fn make_doc() -> Document {
    Document::create(NewDocument {
        workspace_id: WorkspaceId::new("ws-1"),
        title: "Quarterly Report".to_string(),
        content: "full text".to_string(),
        content_type: ContentType::File,
        file: Some(FileMetadata {
            original_name: "report.pdf".to_string(),
            storage_url: "https://objects.synjar.io/ws-1/report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size_bytes: 48_213,
        }),
        source: Some("uploaded by finance".to_string()),
        verification: VerificationStatus::Unverified,
        tags: vec!["Finance".to_string(), "Q3".to_string()],
    })
    .expect("valid document")
}

#[test]
fn record_round_trips_through_json() {
    let mut doc = make_doc();
    doc.start_processing().unwrap();
    doc.fail_processing("embedding provider unavailable").unwrap();

    let json = serde_json::to_string(&doc.to_record()).unwrap();
    let record: DocumentRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(Document::reconstitute(record), doc);
}

#[test]
fn serialized_literals_match_platform_canon() {
    let doc = make_doc();
    let value = serde_json::to_value(doc.to_record()).unwrap();

    assert_eq!(value["content_type"], "FILE");
    assert_eq!(value["verification"], "UNVERIFIED");
    assert_eq!(value["processing"], "PENDING");
    assert_eq!(value["tags"][0], "finance");
    assert_eq!(value["tags"][1], "q3");
}

#[test]
fn invariant_reconstitute_trusts_record_verbatim() {
    // A hand-written record that would never pass validated creation: empty
    // title, empty id, un-normalized tag. Reconstruction takes it as-is.
    let json = r#"{
        "id": "",
        "workspace_id": "ws-9",
        "title": "",
        "content": "legacy row",
        "content_type": "TEXT",
        "file": null,
        "source": null,
        "verification": "VERIFIED",
        "processing": "FAILED",
        "processing_error": "boom",
        "tags": ["Not Normalized!"],
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T11:30:00Z"
    }"#;

    let record: DocumentRecord = serde_json::from_str(json).unwrap();
    let doc = Document::reconstitute(record.clone());

    assert_eq!(doc.title(), "");
    assert!(!doc.id().is_assigned());
    assert_eq!(doc.processing(), ProcessingStatus::Failed);
    assert_eq!(doc.processing_error(), Some("boom"));
    assert_eq!(doc.tags()[0].as_str(), "Not Normalized!");
    assert_eq!(doc.to_record(), record);
}
