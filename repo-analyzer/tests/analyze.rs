// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! End-to-end runs of the analyzer against a local mock API.

use mockito::{Matcher, Mock, ServerGuard};
use repo_analyzer::{AnalyzerConfig, Error, analyze};
use serde_json::json;

const REPOSITORY_PATH: &str = "/repos/octocat/Hello-World";

fn config(server: &ServerGuard,) -> AnalyzerConfig
{
    AnalyzerConfig::default().with_base_url(server.url(),)
}

async fn mock_json(server: &mut ServerGuard, path: &str, body: serde_json::Value,) -> Mock
{
    server
        .mock("GET", path,)
        .with_status(200,)
        .with_header("content-type", "application/json",)
        .with_body(body.to_string(),)
        .create_async()
        .await
}

async fn mock_page(
    server: &mut ServerGuard,
    path: &str,
    status: usize,
    body: serde_json::Value,
) -> Mock
{
    server
        .mock("GET", path,)
        .match_query(Matcher::UrlEncoded("per_page".into(), "5".into(),),)
        .with_status(status,)
        .with_header("content-type", "application/json",)
        .with_body(body.to_string(),)
        .create_async()
        .await
}

fn metadata_body() -> serde_json::Value
{
    json!({
        "name": "Hello-World",
        "description": "My first repo",
        "stargazers_count": 42,
        "forks_count": 3,
        "open_issues_count": 1,
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2024-05-01T08:00:00Z"
    })
}

fn commits_body() -> serde_json::Value
{
    json!([
        {
            "sha": "7fd1a60",
            "commit": {
                "author": { "name": "Mona Lisa", "date": "2024-02-01T12:00:00Z" },
                "message": "Add README\n\nDescribe the project."
            }
        },
        {
            "sha": "553c207",
            "commit": {
                "author": { "name": "Hubot", "date": "2024-01-15T09:30:00Z" },
                "message": "Initial commit"
            }
        }
    ])
}

fn contributors_body() -> serde_json::Value
{
    json!([
        { "login": "octocat", "contributions": 32 },
        { "login": "hubot", "contributions": 5 }
    ])
}

#[tokio::test]
async fn full_run_renders_every_section_in_order()
{
    let mut server = mockito::Server::new_async().await;
    let metadata = mock_json(&mut server, REPOSITORY_PATH, metadata_body(),).await;
    let languages = mock_json(
        &mut server,
        "/repos/octocat/Hello-World/languages",
        json!({ "Go": 300, "Python": 300, "Rust": 400 }),
    )
    .await;
    let commits =
        mock_page(&mut server, "/repos/octocat/Hello-World/commits", 200, commits_body(),).await;
    let contributors = mock_page(
        &mut server,
        "/repos/octocat/Hello-World/contributors",
        200,
        contributors_body(),
    )
    .await;

    let mut output = Vec::new();
    analyze(&config(&server,), "octocat/Hello-World", &mut output,)
        .await
        .expect("analysis should succeed",);

    let rendered = String::from_utf8(output,).expect("invalid UTF-8",);
    assert_eq!(rendered, include_str!("fixtures/full_report.txt"));

    metadata.assert_async().await;
    languages.assert_async().await;
    commits.assert_async().await;
    contributors.assert_async().await;
}

#[tokio::test]
async fn empty_language_map_skips_the_section()
{
    let mut server = mockito::Server::new_async().await;
    let _metadata = mock_json(&mut server, REPOSITORY_PATH, metadata_body(),).await;
    let _languages =
        mock_json(&mut server, "/repos/octocat/Hello-World/languages", json!({}),).await;
    let _commits =
        mock_page(&mut server, "/repos/octocat/Hello-World/commits", 200, json!([]),).await;
    let _contributors =
        mock_page(&mut server, "/repos/octocat/Hello-World/contributors", 200, json!([]),).await;

    let mut output = Vec::new();
    analyze(&config(&server,), "octocat/Hello-World", &mut output,)
        .await
        .expect("analysis should succeed",);

    let rendered = String::from_utf8(output,).expect("invalid UTF-8",);
    assert!(!rendered.contains("Language Statistics"));
    assert!(!rendered.contains("| Language"));
    assert!(rendered.contains("Recent Commits:"));
    assert!(rendered.contains("Top Contributors:"));
}

#[tokio::test]
async fn missing_repository_reports_status_and_stops()
{
    let mut server = mockito::Server::new_async().await;
    let metadata = server
        .mock("GET", REPOSITORY_PATH,)
        .with_status(404,)
        .with_body(r#"{"message":"Not Found"}"#,)
        .create_async()
        .await;
    let languages = server
        .mock("GET", "/repos/octocat/Hello-World/languages",)
        .expect(0,)
        .create_async()
        .await;

    let mut output = Vec::new();
    let error = analyze(&config(&server,), "octocat/Hello-World", &mut output,)
        .await
        .expect_err("404 must abort the run",);

    match &error {
        Error::Api {
            status,
            body,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(body, r#"{"message":"Not Found"}"#);
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert!(error.to_string().contains("404"));
    assert!(output.is_empty());

    metadata.assert_async().await;
    languages.assert_async().await;
}

#[tokio::test]
async fn failure_mid_run_keeps_earlier_sections_and_does_not_retry()
{
    let mut server = mockito::Server::new_async().await;
    let _metadata = mock_json(&mut server, REPOSITORY_PATH, metadata_body(),).await;
    let _languages =
        mock_json(&mut server, "/repos/octocat/Hello-World/languages", json!({ "Rust": 1 }),).await;
    let commits = server
        .mock("GET", "/repos/octocat/Hello-World/commits",)
        .match_query(Matcher::Any,)
        .with_status(500,)
        .with_body("upstream exploded",)
        .expect(1,)
        .create_async()
        .await;

    let mut output = Vec::new();
    let error = analyze(&config(&server,), "octocat/Hello-World", &mut output,)
        .await
        .expect_err("500 must abort the run",);

    assert_eq!(error.status(), Some(500));
    assert_eq!(error.to_string(), "API Error: 500 - upstream exploded");

    let rendered = String::from_utf8(output,).expect("invalid UTF-8",);
    assert!(rendered.contains("Repository Information:"));
    assert!(rendered.contains("| Rust     | 1     | 100.0%     |"));
    assert!(!rendered.contains("Recent Commits"));

    commits.assert_async().await;
}

#[tokio::test]
async fn anonymous_requests_send_no_authorization_header()
{
    let mut server = mockito::Server::new_async().await;
    let metadata = server
        .mock("GET", REPOSITORY_PATH,)
        .match_header("authorization", Matcher::Missing,)
        .with_status(200,)
        .with_body(metadata_body().to_string(),)
        .create_async()
        .await;
    let _languages = server
        .mock("GET", "/repos/octocat/Hello-World/languages",)
        .with_status(403,)
        .with_body("rate limited",)
        .create_async()
        .await;

    let mut output = Vec::new();
    let error = analyze(&config(&server,), "octocat/Hello-World", &mut output,)
        .await
        .expect_err("languages stage fails",);

    assert_eq!(error.status(), Some(403));
    metadata.assert_async().await;
}

#[tokio::test]
async fn configured_token_is_sent_as_authorization()
{
    let mut server = mockito::Server::new_async().await;
    let metadata = server
        .mock("GET", REPOSITORY_PATH,)
        .match_header("authorization", Matcher::Regex("secret-token".into(),),)
        .with_status(200,)
        .with_body(metadata_body().to_string(),)
        .create_async()
        .await;
    let _languages = server
        .mock("GET", "/repos/octocat/Hello-World/languages",)
        .with_status(401,)
        .with_body("bad credentials",)
        .create_async()
        .await;

    let config = config(&server,).with_token(Some("secret-token".to_owned(),),);
    let mut output = Vec::new();
    let error = analyze(&config, "octocat/Hello-World", &mut output,)
        .await
        .expect_err("languages stage fails",);

    assert_eq!(error.status(), Some(401));
    metadata.assert_async().await;
}

#[tokio::test]
async fn unexpected_payload_is_a_decode_error()
{
    let mut server = mockito::Server::new_async().await;
    let _metadata =
        mock_json(&mut server, REPOSITORY_PATH, json!({ "description": "no counts" }),).await;

    let mut output = Vec::new();
    let error = analyze(&config(&server,), "octocat/Hello-World", &mut output,)
        .await
        .expect_err("payload lacks required fields",);

    assert!(matches!(error, Error::Decode { .. }), "unexpected error: {error:?}");
    assert!(output.is_empty());
}

#[tokio::test]
async fn malformed_target_makes_no_request()
{
    let mut server = mockito::Server::new_async().await;
    let any = server.mock("GET", Matcher::Any,).expect(0,).create_async().await;

    let mut output = Vec::new();
    let error = analyze(&config(&server,), "invalidformat", &mut output,)
        .await
        .expect_err("malformed target",);

    assert!(matches!(error, Error::Usage { .. }));
    assert!(error.to_string().contains("owner/name"));
    any.assert_async().await;
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error()
{
    let config = AnalyzerConfig::default().with_base_url("http://127.0.0.1:1",);
    let mut output = Vec::new();

    let error = analyze(&config, "octocat/Hello-World", &mut output,)
        .await
        .expect_err("nothing listens on port 1",);

    assert!(matches!(error, Error::Transport { .. }), "unexpected error: {error:?}");

    let message = error.to_string().to_lowercase();
    assert!(message.contains("refused"), "root cause missing from {message:?}");
    assert!(output.is_empty());
}
