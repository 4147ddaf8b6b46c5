//! End-to-end client tests against a mock HTTP server.

use cr_client::{ClashRoyaleClient, Config, Error};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sml_profile() -> serde_json::Value {
  json!({
    "tag": "C0G20PR2",
    "name": "SML",
    "trophies": 4223,
    "clan": {
      "tag": "2CCCP",
      "name": "Reddit Delta",
      "role": "Leader",
      "badge": {"url": "/badge/reddit.png"}
    },
    "games": {"total": 4559, "currentWinStreak": -3}
  })
}

fn client_for(server: &MockServer) -> ClashRoyaleClient {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .try_init();
  ClashRoyaleClient::new(Config::with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_get_profile_end_to_end() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/player/C0G20PR2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(sml_profile()))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  // Raw input is normalized into the request path
  let profile = client.get_profile("#c0g20pr2").await.unwrap();

  assert_eq!(profile.name.as_deref(), Some("SML"));
  assert_eq!(profile.tag.as_deref(), Some("C0G20PR2"));
  assert_eq!(profile.clan_name(), "Reddit Delta");
  assert_eq!(profile.clan_role(), "Leader");
  assert_eq!(profile.games.win_streak, 0);
  assert_eq!(profile.as_payload(), &sml_profile());
}

#[tokio::test]
async fn test_invalid_tag_fails_before_any_request() {
  let server = MockServer::start().await;
  let client = client_for(&server);

  let err = client.get_profile("C0G20PR!").await.unwrap_err();
  match err {
    Error::InvalidTag { invalid_chars, .. } => assert_eq!(invalid_chars, vec!['!']),
    other => panic!("expected InvalidTag, got {other:?}"),
  }
  assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_profiles_batch_single_request_in_order() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/player/C0G20PR2,PY9VC98C"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"tag": "C0G20PR2", "name": "SML"},
      {"tag": "PY9VC98C", "name": "Selfish"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let profiles = client.get_profiles(&["#c0g20pr2", "PYOVC98C"]).await.unwrap();

  assert_eq!(profiles.len(), 2);
  assert_eq!(profiles[0].name.as_deref(), Some("SML"));
  assert_eq!(profiles[1].name.as_deref(), Some("Selfish"));
  // One batch = one URL identity, so batch-mates compare equal
  assert_eq!(profiles[0], profiles[1]);
}

#[tokio::test]
async fn test_get_clan_unwraps_single_element_array() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/clan/2CCCP"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"tag": "2CCCP", "name": "Reddit Alpha", "members": []}
    ])))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let clan = client.get_clan("2CCCP").await.unwrap();
  assert_eq!(clan.name.as_deref(), Some("Reddit Alpha"));
}

#[tokio::test]
async fn test_get_clans_batch() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/clan/2CCCP,8UU2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"tag": "2CCCP", "name": "Reddit Alpha"},
      {"tag": "8UU2", "name": "Reddit Bravo"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let clans = client.get_clans(&["2CCCP", "8UU2"]).await.unwrap();
  assert_eq!(clans.len(), 2);
  assert_eq!(clans[0].name.as_deref(), Some("Reddit Alpha"));
  assert_eq!(clans[1].name.as_deref(), Some("Reddit Bravo"));
}

#[tokio::test]
async fn test_get_top_clans_and_constants() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/top/clans"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "Nova"}])))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/constants"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"arenas": [{"name": "Goblin Stadium"}]})),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);

  let top = client.get_top_clans().await.unwrap();
  assert_eq!(top[0]["name"], json!("Nova"));

  let constants = client.get_constants().await.unwrap();
  assert_eq!(constants.get("arenas").unwrap()[0]["name"], json!("Goblin Stadium"));
}

#[tokio::test]
async fn test_non_2xx_classified_with_status_and_upstream_message() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/player/C0G20PR2"))
    .respond_with(
      ResponseTemplate::new(404).set_body_json(json!({"error": "player not found"})),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.get_profile("C0G20PR2").await.unwrap_err();
  match err {
    Error::Response { status, message } => {
      assert_eq!(status, Some(404));
      assert_eq!(message, "player not found");
    }
    other => panic!("expected Response, got {other:?}"),
  }
}

#[tokio::test]
async fn test_malformed_body_classified_as_response_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/constants"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.get_constants().await.unwrap_err();
  assert!(matches!(err, Error::Response { status: Some(200), .. }));
}

#[tokio::test]
async fn test_timeout_resolves_to_timeout_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/player/C0G20PR2"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(sml_profile())
        .set_delay(Duration::from_secs(5)),
    )
    .mount(&server)
    .await;

  let mut config = Config::with_base_url(server.uri());
  config.timeout_secs = 1;
  let client = ClashRoyaleClient::new(config).unwrap();

  let err = client.get_profile("C0G20PR2").await.unwrap_err();
  assert!(matches!(err, Error::Timeout { secs: 1 }));
}

#[tokio::test]
async fn test_transport_failure_classified_as_response_error() {
  // Nothing is listening on this port
  let client =
    ClashRoyaleClient::new(Config::with_base_url("http://127.0.0.1:9")).unwrap();
  let err = client.get_profile("C0G20PR2").await.unwrap_err();
  assert!(matches!(err, Error::Response { status: None, .. }));
}
