//! Request shape and failure propagation for every client operation,
//! exercised against recording stubs.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use ragkb_client::{
    AddDocumentRequest, ChunkStrategy, CrawlRequest, CreateLibraryRequest, KnowledgeError,
    ProcessOssDocumentRequest, TransportError, UpdateDocumentRequest, UpdateLibraryRequest,
    UploadFile, UploadOutcome,
};
use serde_json::{Value, json};
use support::{Call, StubFetcher, client_failing, client_ok, client_with_fetcher, count_warnings};

fn canned() -> Value {
    json!({ "code": 200, "message": "ok", "data": { "id": 9 } })
}

// ── Request shapes ─────────────────────────────────────────────────

#[tokio::test]
async fn list_libraries_gets_collection() {
    let client = client_ok(canned());
    let value = client.list_libraries().await.unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("GET", "/api/knowledge/libraries")]
    );
}

#[tokio::test]
async fn get_library_gets_by_id() {
    let client = client_ok(canned());
    let value = client.get_library(12).await.unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("GET", "/api/knowledge/libraries/12")]
    );
}

#[tokio::test]
async fn create_library_posts_title_and_description() {
    let client = client_ok(canned());
    let value = client
        .create_library(&CreateLibraryRequest {
            title: "Tokio".into(),
            description: "runtime internals".into(),
        })
        .await
        .unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![
            Call::new("POST", "/api/knowledge/libraries")
                .with_body(json!({ "title": "Tokio", "description": "runtime internals" }))
        ]
    );
}

#[tokio::test]
async fn update_library_puts_partial_body() {
    let client = client_ok(canned());
    let value = client
        .update_library(
            12,
            &UpdateLibraryRequest {
                title: None,
                description: Some("renamed".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![
            Call::new("PUT", "/api/knowledge/libraries/12")
                .with_body(json!({ "description": "renamed" }))
        ]
    );
}

#[tokio::test]
async fn delete_library_deletes_by_id() {
    let client = client_ok(canned());
    let value = client.delete_library(12).await.unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("DELETE", "/api/knowledge/libraries/12")]
    );
}

#[tokio::test]
async fn add_document_posts_library_title_content() {
    let client = client_ok(canned());
    let value = client
        .add_document(&AddDocumentRequest {
            library_id: 12,
            title: "Pinning".into(),
            content: "Pin<&mut T> guarantees...".into(),
        })
        .await
        .unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("POST", "/api/knowledge/documents").with_body(json!({
            "library_id": 12,
            "title": "Pinning",
            "content": "Pin<&mut T> guarantees..."
        }))]
    );
}

#[tokio::test]
async fn update_document_puts_by_id() {
    let client = client_ok(canned());
    let value = client
        .update_document(
            77,
            &UpdateDocumentRequest {
                title: Some("Pinning, revised".into()),
                content: Some("new text".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("PUT", "/api/knowledge/documents/77").with_body(json!({
            "title": "Pinning, revised",
            "content": "new text"
        }))]
    );
}

#[tokio::test]
async fn delete_document_deletes_by_id() {
    let client = client_ok(canned());
    let value = client.delete_document(77).await.unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("DELETE", "/api/knowledge/documents/77")]
    );
}

#[tokio::test]
async fn request_upload_url_posts_document_name() {
    let reply = json!({ "code": 200, "data": "https://bucket.cos.example.com/a.pdf?sign=x" });
    let client = client_ok(reply.clone());
    let value = client.request_upload_url("a.pdf").await.unwrap();
    assert_eq!(value, reply);
    assert_eq!(
        client.transport().calls(),
        vec![
            Call::new("POST", "/api/knowledge/upload-url")
                .with_body(json!({ "document_name": "a.pdf" }))
        ]
    );
}

#[tokio::test]
async fn crawl_site_posts_url_and_library() {
    let client = client_ok(canned());
    let value = client
        .crawl_site(&CrawlRequest {
            url: "https://tokio.rs/tokio/tutorial".into(),
            library_id: 4,
            max_pages: Some(25),
        })
        .await
        .unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("POST", "/api/crawl/site").with_body(json!({
            "url": "https://tokio.rs/tokio/tutorial",
            "library_id": 4,
            "max_pages": 25
        }))]
    );
}

#[tokio::test]
async fn crawl_status_gets_by_collection() {
    let client = client_ok(canned());
    let value = client.crawl_status("kb_4_tokio").await.unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("GET", "/api/crawl/status/kb_4_tokio")]
    );
}

#[tokio::test]
async fn process_oss_document_posts_all_fields() {
    let client = client_ok(canned());
    let value = client
        .process_oss_document(&ProcessOssDocumentRequest {
            oss_url: "https://bucket.cos.example.com/a.pdf".into(),
            collection_id: "col-1".into(),
            document_name: "a.pdf".into(),
            library_id: 42,
        })
        .await
        .unwrap();
    assert_eq!(value, canned());
    assert_eq!(
        client.transport().calls(),
        vec![
            Call::new("POST", "/api/crawl/process-oss-document").with_body(json!({
                "oss_url": "https://bucket.cos.example.com/a.pdf",
                "collection_id": "col-1",
                "document_name": "a.pdf",
                "library_id": 42
            }))
        ]
    );
}

#[tokio::test]
async fn knowledge_graph_defaults_label_to_star() {
    let graph = json!({ "nodes": [], "edges": [], "is_truncated": false });
    let client = client_ok(graph.clone());
    let value = client.get_knowledge_graph("col-1", None).await.unwrap();
    assert_eq!(value, graph);
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("GET", "/api/visual/graph/col-1").with_query("label", "*")]
    );
}

#[tokio::test]
async fn knowledge_graph_passes_explicit_label() {
    let client = client_ok(canned());
    client
        .get_knowledge_graph("col-1", Some("Tokio"))
        .await
        .unwrap();
    assert_eq!(
        client.transport().calls(),
        vec![Call::new("GET", "/api/visual/graph/col-1").with_query("label", "Tokio")]
    );
}

#[tokio::test]
async fn upload_local_file_defaults_to_markdown_strategy() {
    let client = client_ok(canned());
    let file = UploadFile::new("notes.md", b"# Notes".to_vec());
    let value = client
        .upload_local_file(file.clone(), "col-1", 42, None)
        .await
        .unwrap();
    assert_eq!(value, canned());

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/api/upload/process");
    assert_eq!(calls[0].body, None);

    let multipart = calls[0].multipart.as_ref().expect("multipart body");
    assert_eq!(multipart.file_field, "file");
    assert_eq!(multipart.file, file);
    assert_eq!(multipart.field("collection_id"), Some("col-1"));
    assert_eq!(multipart.field("library_id"), Some("42"));
    assert_eq!(multipart.field("chunk_strategy"), Some("markdown"));
}

#[tokio::test]
async fn upload_local_file_sends_chosen_strategy() {
    let client = client_ok(canned());
    let file = UploadFile::new("paper.pdf", vec![0x25, 0x50, 0x44, 0x46]);
    client
        .upload_local_file(file, "col-1", 42, Some(ChunkStrategy::Semantic))
        .await
        .unwrap();
    let calls = client.transport().calls();
    let multipart = calls[0].multipart.as_ref().expect("multipart body");
    assert_eq!(multipart.field("chunk_strategy"), Some("semantic"));
    assert_eq!(multipart.file.content_type, "application/pdf");
}

#[tokio::test]
async fn health_gets_root_probe() {
    let reply = json!({ "message": "Hello, FastAPI!" });
    let client = client_ok(reply.clone());
    assert_eq!(client.health().await.unwrap(), reply);
    assert_eq!(client.transport().calls(), vec![Call::new("GET", "/health")]);
}

// ── Direct object-storage upload ───────────────────────────────────

const PRESIGNED: &str =
    "https://ragagent-file.cos.ap-guangzhou.myqcloud.com/docs/a.pdf?q-sign-algorithm=sha1&q-signature=abc";

#[tokio::test]
async fn object_storage_upload_success_strips_query() {
    let client = client_with_fetcher(StubFetcher::status(200, "OK"));
    let file = UploadFile::new("a.pdf", b"%PDF-1.7".to_vec());
    let outcome = client
        .upload_to_object_storage(PRESIGNED, file)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        UploadOutcome {
            success: true,
            url: "https://ragagent-file.cos.ap-guangzhou.myqcloud.com/docs/a.pdf".into(),
        }
    );

    let puts = client.fetcher().puts();
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].url, PRESIGNED);
    assert_eq!(puts[0].body, b"%PDF-1.7".to_vec());
    assert_eq!(puts[0].content_type, "application/pdf");
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn object_storage_upload_forbidden_reports_status() {
    let (warnings, _guard) = count_warnings();
    let client = client_with_fetcher(StubFetcher::status(403, "Forbidden"));
    let file = UploadFile::new("a.pdf", b"%PDF".to_vec());
    let err = client
        .upload_to_object_storage(PRESIGNED, file)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("403"), "got: {err}");
    assert!(matches!(
        err.transport(),
        Some(TransportError::UploadFailed { status: 403, status_text }) if status_text == "Forbidden"
    ));
    assert_eq!(err.operation(), Some("upload_to_object_storage"));
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn object_storage_upload_network_failure_propagates() {
    let (warnings, _guard) = count_warnings();
    let client = client_with_fetcher(StubFetcher::unreachable());
    let err = client
        .upload_to_object_storage(PRESIGNED, UploadFile::new("a.pdf", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(
        err.transport(),
        Some(TransportError::Parse(msg)) if msg == "connection reset by peer"
    ));
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}

// ── Failure propagation ────────────────────────────────────────────

fn backend_down() -> TransportError {
    TransportError::Api {
        status: 503,
        message: "backend down".into(),
    }
}

/// The failure carries the operation label and the stub's original error,
/// and exactly one WARN was emitted for it.
fn assert_failed<V: std::fmt::Debug>(
    result: Result<V, KnowledgeError>,
    operation: &str,
    warnings: &AtomicUsize,
    expected_warnings: &mut usize,
) {
    let err = result.expect_err("operation should fail");
    assert_eq!(err.operation(), Some(operation));
    match err.transport() {
        Some(TransportError::Api { status, message }) => {
            assert_eq!(*status, 503);
            assert_eq!(message, "backend down");
        }
        other => panic!("{operation}: unexpected cause {other:?}"),
    }
    *expected_warnings += 1;
    assert_eq!(
        warnings.load(Ordering::SeqCst),
        *expected_warnings,
        "{operation} should warn exactly once"
    );
}

#[tokio::test]
async fn every_operation_propagates_transport_failure() {
    let (warnings, _guard) = count_warnings();
    let client = client_failing(backend_down);
    let mut seen = 0;

    assert_failed(client.list_libraries().await, "list_libraries", &warnings, &mut seen);
    assert_failed(client.get_library(1).await, "get_library", &warnings, &mut seen);
    assert_failed(
        client
            .create_library(&CreateLibraryRequest {
                title: "t".into(),
                description: "d".into(),
            })
            .await,
        "create_library",
        &warnings,
        &mut seen,
    );
    assert_failed(
        client
            .update_library(1, &UpdateLibraryRequest::default())
            .await,
        "update_library",
        &warnings,
        &mut seen,
    );
    assert_failed(client.delete_library(1).await, "delete_library", &warnings, &mut seen);
    assert_failed(
        client
            .add_document(&AddDocumentRequest {
                library_id: 1,
                title: "t".into(),
                content: "c".into(),
            })
            .await,
        "add_document",
        &warnings,
        &mut seen,
    );
    assert_failed(
        client
            .update_document(2, &UpdateDocumentRequest::default())
            .await,
        "update_document",
        &warnings,
        &mut seen,
    );
    assert_failed(client.delete_document(2).await, "delete_document", &warnings, &mut seen);
    assert_failed(
        client.request_upload_url("a.pdf").await,
        "request_upload_url",
        &warnings,
        &mut seen,
    );
    assert_failed(
        client
            .crawl_site(&CrawlRequest {
                url: "https://example.com".into(),
                library_id: 1,
                max_pages: None,
            })
            .await,
        "crawl_site",
        &warnings,
        &mut seen,
    );
    assert_failed(client.crawl_status("c").await, "crawl_status", &warnings, &mut seen);
    assert_failed(
        client
            .upload_local_file(UploadFile::new("a.txt", vec![]), "col-1", 42, None)
            .await,
        "upload_local_file",
        &warnings,
        &mut seen,
    );
    assert_failed(
        client.get_knowledge_graph("col-1", None).await,
        "get_knowledge_graph",
        &warnings,
        &mut seen,
    );
    assert_failed(
        client
            .process_oss_document(&ProcessOssDocumentRequest {
                oss_url: "https://bucket.example.com/a.pdf".into(),
                collection_id: "col-1".into(),
                document_name: "a.pdf".into(),
                library_id: 42,
            })
            .await,
        "process_oss_document",
        &warnings,
        &mut seen,
    );
    assert_failed(client.health().await, "health", &warnings, &mut seen);

    // one request per operation, no retries
    assert_eq!(client.transport().calls().len(), seen);
}

#[tokio::test]
async fn successful_calls_do_not_warn() {
    let (warnings, _guard) = count_warnings();
    let client = client_ok(canned());
    client.list_libraries().await.unwrap();
    client.get_knowledge_graph("col-1", None).await.unwrap();
    assert_eq!(warnings.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let client = client_ok(canned());
    let (a, b, c) = tokio::join!(
        client.get_library(1),
        client.get_library(2),
        client.delete_document(3),
    );
    assert!(a.is_ok() && b.is_ok() && c.is_ok());

    let mut paths: Vec<String> = client
        .transport()
        .calls()
        .into_iter()
        .map(|call| call.path)
        .collect();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "/api/knowledge/documents/3",
            "/api/knowledge/libraries/1",
            "/api/knowledge/libraries/2",
        ]
    );
}
