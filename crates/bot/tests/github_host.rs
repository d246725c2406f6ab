//! GitHub adapter tests against a mock HTTP server.

use serde_json::json;
use triage::{PrFilter, PrQuery, ReleaseKind, RepoHost};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bot::github::GitHubHost;

async fn host(server: &MockServer) -> GitHubHost {
    GitHubHost::new("test-token", "octo", "widgets").with_api_base(server.uri())
}

#[tokio::test]
async fn list_labels_parses_payload_with_null_description() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "🐞 aspect.Bug", "description": "This issue describes a bug.", "color": "AA5117" },
            { "name": "legacy", "description": null, "color": "ededed" },
        ])))
        .mount(&server)
        .await;

    let labels = host(&server).await.list_labels().await;
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].name, "🐞 aspect.Bug");
    assert_eq!(labels[1].description, "");
}

#[tokio::test]
async fn transport_failure_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/labels"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(host(&server).await.list_labels().await.is_empty());
}

#[tokio::test]
async fn replace_labels_removes_then_adds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/repos/octo/widgets/issues/7/labels/old-label"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/widgets/issues/7/labels"))
        .and(body_json(json!({ "labels": ["🔬 pr.ToReview"] })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ok = host(&server)
        .await
        .replace_labels(7, &["old-label".to_string()], &["🔬 pr.ToReview".to_string()])
        .await;
    assert!(ok);
}

#[tokio::test]
async fn removal_failure_does_not_block_addition() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/repos/octo/widgets/issues/7/labels/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/widgets/issues/7/labels"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ok = host(&server)
        .await
        .replace_labels(7, &["gone".to_string()], &["🏃 pr.OnGoing".to_string()])
        .await;
    // Aggregate is false, but the addition was still attempted (asserted by
    // the POST expectation when the mock server verifies on drop).
    assert!(!ok);
}

#[tokio::test]
async fn last_release_selects_by_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 3, "tag_name": "v1.2.0", "name": "v1.2.0", "draft": true,
                "prerelease": false, "created_at": "2026-08-20T10:00:00Z",
                "published_at": null, "body": ""
            },
            {
                "id": 2, "tag_name": "v1.1.0", "name": "v1.1.0", "draft": false,
                "prerelease": false, "created_at": "2026-07-01T10:00:00Z",
                "published_at": "2026-07-02T10:00:00Z", "body": "Notes"
            },
        ])))
        .mount(&server)
        .await;

    let adapter = host(&server).await;
    assert_eq!(adapter.last_release(ReleaseKind::Draft).await.map(|r| r.id), Some(3));
    assert_eq!(adapter.last_release(ReleaseKind::Published).await.map(|r| r.id), Some(2));
}

#[tokio::test]
async fn changelogable_filter_runs_client_side() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "number": 1, "state": "closed", "title": "Fix crash",
                "created_at": "2026-08-01T10:00:00Z", "updated_at": "2026-08-02T10:00:00Z",
                "merged_at": "2026-08-02T10:00:00Z",
                "labels": [{ "name": "🐞 aspect.Bug", "color": "AA5117" }]
            },
            {
                "number": 2, "state": "closed", "title": "Closed unmerged",
                "created_at": "2026-08-01T10:00:00Z", "updated_at": "2026-08-02T10:00:00Z",
                "merged_at": null, "labels": []
            },
            {
                "number": 3, "state": "closed", "title": "Secret refactor",
                "created_at": "2026-08-01T10:00:00Z", "updated_at": "2026-08-02T10:00:00Z",
                "merged_at": "2026-08-03T10:00:00Z",
                "labels": [{ "name": "👻 changelog.DoNotList", "color": "000000" }]
            },
        ])))
        .mount(&server)
        .await;

    let prs = host(&server)
        .await
        .list_pull_requests(&PrQuery {
            filter: PrFilter::Changelogable,
            since: None,
            author: None,
        })
        .await;

    let numbers: Vec<u64> = prs.iter().map(|pr| pr.number).collect();
    assert_eq!(numbers, [1]);
}
