//! Aggregation fan-out tests against a mock Roblox API.

use bloxbot_core::{AttributeResult, RequesterIdentity, render_user_embed};
use bloxbot_error::RobloxErrorKind;
use bloxbot_roblox::{RobloxClient, RobloxEndpoints};
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> RobloxClient {
    RobloxClient::with_endpoints(RobloxEndpoints::single_host(server.uri()))
}

fn profile_body() -> serde_json::Value {
    json!({
        "id": 12345,
        "name": "builderman",
        "displayName": "Builder",
        "description": "I build things",
        "created": "2006-03-08T09:15:00Z",
        "hasVerifiedBadge": true
    })
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/users/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn partial_outages_degrade_fields_instead_of_failing() {
    // Only the profile endpoint is up; every other lookup 404s against the
    // mock server and settles as absence.
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let client = client_for(&server).await;
    let bundle = client.aggregate_user(12345).await.expect("bundle");

    assert_eq!(bundle.username, AttributeResult::Present("builderman".into()));
    assert_eq!(bundle.display_name, AttributeResult::Present("Builder".into()));
    assert_eq!(bundle.verified, AttributeResult::Present(true));
    assert_eq!(
        bundle.created,
        AttributeResult::Present(Utc.with_ymd_and_hms(2006, 3, 8, 9, 15, 0).unwrap())
    );
    // The basic profile description backs the blurb when the extended
    // profile is down.
    assert_eq!(bundle.blurb, AttributeResult::Present("I build things".into()));

    assert_eq!(bundle.friends, AttributeResult::Absent);
    assert_eq!(bundle.followers, AttributeResult::Absent);
    assert_eq!(bundle.following, AttributeResult::Absent);
    assert_eq!(bundle.presence, AttributeResult::Absent);
    assert_eq!(bundle.headshot_url, AttributeResult::Absent);
    // Groups collapse failure to zero by policy.
    assert_eq!(bundle.group_count, AttributeResult::Present(0));
    assert!(bundle.badges.is_empty());
}

#[tokio::test]
async fn degraded_bundle_renders_placeholders_not_errors() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let client = client_for(&server).await;
    let bundle = client.aggregate_user(12345).await.expect("bundle");

    let requester = RequesterIdentity::new("tester#0001".into(), None);
    let now = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
    let embed = render_user_embed(&bundle, &requester, now);

    assert_eq!(embed.title, "Builder (builderman)");
    let social = embed
        .fields
        .iter()
        .find(|f| f.name == "Friends | Followers | Following")
        .expect("social row");
    assert_eq!(
        social.value,
        "**Friends** N/A | **Followers** N/A | **Following** N/A"
    );
    let presence = embed
        .fields
        .iter()
        .find(|f| f.name == "Presence")
        .expect("presence field");
    assert_eq!(presence.value, "Unknown");
}

#[tokio::test]
async fn aggregation_fails_only_when_the_profile_is_absent() {
    // Everything except the profile endpoint succeeds; the aggregation must
    // still fail, and with the profile-specific error.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/12345"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/12345/friends/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/presence/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userPresences": [{"userPresenceType": 1, "userId": 12345}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.aggregate_user(12345).await.expect_err("no profile");
    assert_eq!(*err.kind(), RobloxErrorKind::ProfileUnavailable(12345));
}

#[tokio::test]
async fn extended_profile_blurb_wins_over_the_description() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/users/12345/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blurb": "Hello from the extended profile",
            "isInventoryPrivate": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bundle = client.aggregate_user(12345).await.expect("bundle");
    assert_eq!(
        bundle.blurb,
        AttributeResult::Present("Hello from the extended profile".into())
    );
    assert_eq!(bundle.inventory_private, AttributeResult::Present(true));
}

#[tokio::test]
async fn fully_healthy_upstreams_fill_every_field() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"targetId": 12345, "state": "Completed", "imageUrl": "https://cdn.example/720.png"}]
        })))
        .mount(&server)
        .await;
    for (endpoint, count) in [("friends", 7), ("followers", 0), ("followings", 3)] {
        Mock::given(method("GET"))
            .and(path(format!("/v1/users/12345/{endpoint}/count")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": count})))
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/v1/presence/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userPresences": [{"userPresenceType": 0, "userId": 12345}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/12345/groups/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"group": {"id": 1, "name": "Alpha"}}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/12345/badges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "Welcome"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/12345/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blurb": "Hi", "isInventoryPrivate": false
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bundle = client.aggregate_user(12345).await.expect("bundle");
    assert_eq!(
        bundle.headshot_url,
        AttributeResult::Present("https://cdn.example/720.png".into())
    );
    assert_eq!(bundle.friends, AttributeResult::Present(7));
    assert_eq!(bundle.followers, AttributeResult::Present(0));
    assert_eq!(bundle.following, AttributeResult::Present(3));
    assert_eq!(
        bundle.presence,
        AttributeResult::Present(bloxbot_core::Presence::Offline)
    );
    assert_eq!(bundle.group_count, AttributeResult::Present(1));
    assert_eq!(bundle.badges, vec!["Welcome".to_string()]);
    assert_eq!(bundle.inventory_private, AttributeResult::Present(false));
}
