use serde_json::json;
use teamcowboy::client::{EventQuery, RsvpStatus, SaveRsvpOptions, UserTeamsQuery};
use teamcowboy::{ClientConfig, TeamCowboy, TeamCowboyBuilder, TeamCowboyError};
use wiremock::matchers::{body_string_contains, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new("private".to_string(), "public".to_string())
        .base_url(format!("{}/v1/", server.uri()))
        .timeout_seconds(5)
}

fn success(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true, "body": body}))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(body_string_contains("method=Auth_GetUserToken"))
        .and(body_string_contains("username=pat"))
        .respond_with(success(json!({"userId": 11, "token": "tok-123"})))
        .expect(1)
        .mount(server)
        .await;
}

#[cfg(test)]
mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_logs_in_and_uses_token() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("GET"))
            .and(query_param("method", "User_GetTeams"))
            .and(query_param("userToken", "tok-123"))
            .respond_with(success(json!([{
                "teamId": 208,
                "name": "Otters",
                "type": {"name": "adult", "title": "Adult"},
                "activity": {"activityId": 3, "name": "Softball"},
                "timezoneId": "America/Los_Angeles"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = TeamCowboy::connect(config_for(&server).credentials("pat", "pw"))
            .await
            .unwrap();
        assert_eq!(client.user_token(), Some("tok-123"));

        let teams = client
            .user_get_teams(&UserTeamsQuery::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].activity.name, "Softball");
    }

    #[tokio::test]
    async fn test_rejected_login_fails_construction() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "body": {"errorCode": "authFailed", "httpResponse": 401, "message": "Bad login"}
            })))
            .mount(&server)
            .await;

        let err = TeamCowboy::connect(config_for(&server).credentials("pat", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, TeamCowboyError::AuthError(_)));
        assert!(err.to_string().contains("Bad login"));
    }

    #[tokio::test]
    async fn test_get_request_without_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("method", "Test_GetRequest"))
            .and(query_param("response_type", "json"))
            .and(query_param("api_key", "public"))
            .respond_with(success(json!({"helloWorld": "ping"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = TeamCowboy::connect(config_for(&server)).await.unwrap();
        assert!(!client.has_user_token());

        let echo = client.test_get_request(Some("ping")).await.unwrap().unwrap();
        assert_eq!(echo.hello_world, "ping");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0]
            .url
            .query_pairs()
            .any(|(k, _)| k == "userToken"));
    }

    #[tokio::test]
    async fn test_client_error_is_none_and_server_error_is_err() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("method", "Event_Get"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "body": {"errorCode": "notFound", "httpResponse": 404, "message": "No such event"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains("method=Event_SaveRSVP"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = TeamCowboyBuilder::new()
            .with_config(config_for(&server))
            .with_user_token("saved-token")
            .build()
            .unwrap();

        let event = client
            .event_get(208, 1, &EventQuery::default())
            .await
            .unwrap();
        assert!(event.is_none());

        let err = client
            .event_save_rsvp(208, 1, RsvpStatus::Maybe, &SaveRsvpOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TeamCowboyError::ServerError { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("method", "Test_GetRequest"))
            .respond_with(success(json!({"helloWorld": "ok"})))
            .expect(3)
            .mount(&server)
            .await;

        let client = TeamCowboy::connect(config_for(&server)).await.unwrap();
        let results = futures::future::join_all(
            (0..3).map(|_| client.test_get_request(None)),
        )
        .await;
        assert!(results.iter().all(|r| matches!(r, Ok(Some(_)))));

        let requests = server.received_requests().await.unwrap();
        let nonces: std::collections::HashSet<String> = requests
            .iter()
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "nonce")
                    .map(|(_, v)| v.into_owned())
            })
            .collect();
        assert_eq!(nonces.len(), 3);
    }
}
