//! Command dispatch tests against a mock Roblox API.
//!
//! These exercise the full per-command pipelines (resolve, fetch, aggregate,
//! render) without a Discord connection.

use bloxbot_core::RequesterIdentity;
use bloxbot_discord::{
    CommandOutcome, HEADSHOT_FAILED_REPLY, USER_INFO_FAILED_REPLY, USER_NOT_FOUND_REPLY,
    run_avatar, run_user, run_userinfo,
};
use bloxbot_roblox::{RobloxClient, RobloxEndpoints};
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> RobloxClient {
    RobloxClient::with_endpoints(RobloxEndpoints::single_host(server.uri()))
}

fn requester() -> RequesterIdentity {
    RequesterIdentity::new("tester#0001".into(), None)
}

#[tokio::test]
async fn avatar_replies_with_the_headshot_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .and(query_param("userIds", "12345"))
        .and(query_param("size", "420x420"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"targetId": 12345, "state": "Completed", "imageUrl": "https://cdn.example/h.png"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        run_avatar(&client, "12345").await,
        CommandOutcome::Text("https://cdn.example/h.png".into())
    );
}

#[tokio::test]
async fn avatar_with_empty_thumbnail_data_reports_the_headshot_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        run_avatar(&client, "12345").await,
        CommandOutcome::Text(HEADSHOT_FAILED_REPLY.into())
    );
}

#[tokio::test]
async fn avatar_for_an_unknown_name_reports_user_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/usernames/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        run_avatar(&client, "nonexistent_user_xyz").await,
        CommandOutcome::Text(USER_NOT_FOUND_REPLY.into())
    );
}

#[tokio::test]
async fn user_command_appends_the_url_to_the_mention() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"targetId": 12345, "state": "Completed", "imageUrl": "https://cdn.example/h.png"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        run_user(&client, "<@999>", "12345").await,
        CommandOutcome::Text("<@999> https://cdn.example/h.png".into())
    );
}

#[tokio::test]
async fn user_command_keeps_the_mention_when_the_avatar_is_missing() {
    let server = MockServer::start().await;

    let client = client_for(&server).await;
    assert_eq!(
        run_user(&client, "<@999>", "12345").await,
        CommandOutcome::Text("<@999>\n(avatar not found)".into())
    );
}

#[tokio::test]
async fn userinfo_for_an_unknown_name_is_text_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/usernames/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let now = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
    let outcome = run_userinfo(&client, "nonexistent_user_xyz", &requester(), now).await;
    assert_eq!(outcome, CommandOutcome::Text(USER_NOT_FOUND_REPLY.into()));
}

#[tokio::test]
async fn userinfo_without_a_profile_reports_the_aggregation_failure() {
    let server = MockServer::start().await;

    let client = client_for(&server).await;
    let now = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
    let outcome = run_userinfo(&client, "12345", &requester(), now).await;
    assert_eq!(outcome, CommandOutcome::Text(USER_INFO_FAILED_REPLY.into()));
}

#[tokio::test]
async fn userinfo_renders_an_embed_when_the_profile_is_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12345,
            "name": "builderman",
            "displayName": "Builder",
            "created": "2006-03-08T09:15:00Z",
            "hasVerifiedBadge": false
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let now = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
    match run_userinfo(&client, "12345", &requester(), now).await {
        CommandOutcome::Embed(embed) => {
            assert_eq!(embed.title, "Builder (builderman)");
            assert_eq!(embed.url, "https://roblox.com/users/12345/profile");
            assert_eq!(embed.author_name, "tester#0001");
        }
        other => panic!("expected an embed, got {other:?}"),
    }
}
