use serde_json::json;
use teamcowboy::core::kernel::{
    compute_signature, ReqwestRest, RequestKind, RequestParams, RestClient, RestClientBuilder,
    RestClientConfig, Sha1Signer, Signer, NONCE_KEY, SIGNATURE_KEY, TIMESTAMP_KEY,
};
use teamcowboy::{CallOutcome, TeamCowboyError};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn rest_for(server: &MockServer) -> ReqwestRest {
    RestClientBuilder::new(RestClientConfig::new(format!("{}/v1/", server.uri())).with_timeout(5))
        .build()
        .unwrap()
}

fn signed_params(kind: RequestKind, method_name: &str) -> RequestParams {
    let mut params = RequestParams::new()
        .with("api_key", "public")
        .with("method", method_name)
        .with(TIMESTAMP_KEY, 1_700_000_000_i64)
        .with(NONCE_KEY, "1700000000000000123456")
        .with("response_type", "json")
        .with("testParam", "Hello World");
    Sha1Signer::new("private".to_string())
        .sign_request(kind, method_name, &mut params)
        .unwrap();
    params
}

/// Parameters as the server received them, from the query string or form body
fn received_params(request: &Request) -> RequestParams {
    let mut url = request.url.clone();
    if !request.body.is_empty() {
        url.set_query(Some(&String::from_utf8_lossy(&request.body)));
    }
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn envelope_error(code: u16, message: &str) -> serde_json::Value {
    json!({
        "success": false,
        "body": {"errorCode": "err", "httpResponse": code, "message": message}
    })
}

#[cfg(test)]
mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/"))
            .and(query_param("method", "Test_GetRequest"))
            .and(query_param("testParam", "Hello World"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "body": {"helloWorld": "Hello World"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rest = rest_for(&server).await;
        let outcome = rest
            .get("", &signed_params(RequestKind::Get, "Test_GetRequest"))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            CallOutcome::Success(json!({"helloWorld": "Hello World"}))
        );
    }

    #[tokio::test]
    async fn test_server_can_verify_get_signature() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let rest = rest_for(&server).await;
        rest.get("", &signed_params(RequestKind::Get, "Test_GetRequest"))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let mut params = received_params(&requests[0]);
        let sig = params.remove(SIGNATURE_KEY).unwrap().to_string();
        let expected =
            compute_signature("private", RequestKind::Get, "Test_GetRequest", &params).unwrap();
        assert_eq!(sig, expected);
    }

    #[tokio::test]
    async fn test_post_sends_form_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/"))
            .and(body_string_contains("method=Test_PostRequest"))
            .and(body_string_contains("sig="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "body": {"helloWorld": "Hello World"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rest = rest_for(&server).await;
        let outcome = rest
            .post("", &signed_params(RequestKind::Post, "Test_PostRequest"))
            .await
            .unwrap();
        assert!(outcome.is_success());

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query().is_none());
        let mut params = received_params(&requests[0]);
        let sig = params.remove(SIGNATURE_KEY).unwrap().to_string();
        assert_eq!(
            sig,
            compute_signature("private", RequestKind::Post, "Test_PostRequest", &params).unwrap()
        );
    }

    #[tokio::test]
    async fn test_declared_not_found_is_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope_error(404, "Event not found")))
            .mount(&server)
            .await;

        let outcome = rest_for(&server)
            .await
            .get("", &signed_params(RequestKind::Get, "Event_Get"))
            .await
            .unwrap();
        let error = outcome.client_error().unwrap();
        assert_eq!(error.http_response, 404);
        assert_eq!(error.message, "Event not found");
        assert!(outcome.payload().is_none());
    }

    #[tokio::test]
    async fn test_declared_service_unavailable_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope_error(503, "Maintenance")))
            .mount(&server)
            .await;

        let err = rest_for(&server)
            .await
            .get("", &signed_params(RequestKind::Get, "Event_Get"))
            .await
            .unwrap_err();
        assert!(matches!(err, TeamCowboyError::ServerError { status: 503, .. }));
        assert!(err.to_string().contains("Maintenance"));
    }

    #[tokio::test]
    async fn test_transport_unauthorized_with_plain_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("denied"))
            .mount(&server)
            .await;

        let err = rest_for(&server)
            .await
            .get("", &signed_params(RequestKind::Get, "User_Get"))
            .await
            .unwrap_err();
        assert!(matches!(err, TeamCowboyError::DecodeError(_)));
    }

    #[tokio::test]
    async fn test_transport_unauthorized_envelope_is_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(envelope_error(401, "Bad signature")))
            .mount(&server)
            .await;

        let outcome = rest_for(&server)
            .await
            .get("", &signed_params(RequestKind::Get, "User_Get"))
            .await
            .unwrap();
        let error = outcome.client_error().unwrap();
        assert_eq!(error.http_response, 401);
        assert_eq!(error.message, "Bad signature");
        assert!(outcome.payload().is_none());
    }

    #[tokio::test]
    async fn test_transport_server_error_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = rest_for(&server)
            .await
            .post("", &signed_params(RequestKind::Post, "Message_Save"))
            .await
            .unwrap_err();
        assert!(err.is_server_error());
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = rest_for(&server)
            .await
            .get("", &signed_params(RequestKind::Get, "User_Get"))
            .await
            .unwrap_err();
        assert!(matches!(err, TeamCowboyError::DecodeError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let rest = ReqwestRest::new("http://127.0.0.1:9/v1/".to_string()).unwrap();
        let err = rest
            .get("", &signed_params(RequestKind::Get, "Test_GetRequest"))
            .await
            .unwrap_err();
        assert!(matches!(err, TeamCowboyError::NetworkError(_)));
    }
}
