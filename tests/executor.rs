use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use postboard_tui::models::PostDraft;
use postboard_tui::network::{create_client, execute};
use postboard_tui::{classify_fetch_error, FailureCategory, Outcome, PostsApi};

fn api_for(server: &MockServer) -> PostsApi {
    PostsApi::new(&format!("{}/posts", server.uri()))
}

fn draft() -> PostDraft {
    PostDraft {
        title: "T".to_string(),
        body: "B".to_string(),
    }
}

#[tokio::test]
async fn test_success_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "T", "body": "B"})))
        .mount(&server)
        .await;

    let outcome = execute(&create_client(), &api_for(&server).fetch_post()).await;
    assert_eq!(
        outcome,
        Outcome::Success {
            status_code: 200,
            decoded_body: json!({"title": "T", "body": "B"}),
        }
    );
}

#[tokio::test]
async fn test_fetch_style_404_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = execute(&create_client(), &api_for(&server).fetch_post()).await;
    assert_eq!(
        outcome,
        Outcome::failure(FailureCategory::HttpStatus, "HTTP error! status: 404")
    );
}

#[tokio::test]
async fn test_legacy_style_404_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = execute(&create_client(), &api_for(&server).fetch_post_legacy()).await;
    assert_eq!(outcome, Outcome::failure(FailureCategory::HttpStatus, "Not Found"));
}

#[tokio::test]
async fn test_non_json_body_is_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let outcome = execute(&create_client(), &api_for(&server).fetch_post()).await;
    assert_eq!(outcome.category(), Some(FailureCategory::Parse));
}

#[tokio::test]
async fn test_refused_connection_is_network_failure() {
    // Grab a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = PostsApi::new(&format!("http://{}/posts", addr));
    let client = create_client();

    let outcome = execute(&client, &api.fetch_post()).await;
    match outcome {
        Outcome::Failure { category, message } => {
            assert_eq!(category, FailureCategory::Network);
            assert!(message.starts_with("NetworkError"), "{message}");
            assert_eq!(
                classify_fetch_error(&message),
                "Network error: Please check your internet connection."
            );
        }
        other => panic!("expected network failure, got {:?}", other),
    }

    let outcome = execute(&client, &api.update_post("1", &draft()).unwrap()).await;
    assert_eq!(outcome.category(), Some(FailureCategory::Network));
}

#[tokio::test]
async fn test_create_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "T", "body": "B"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 101, "title": "T", "body": "B"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = api_for(&server).create_post(&draft()).unwrap();
    let outcome = execute(&create_client(), &request).await;
    assert_eq!(
        outcome,
        Outcome::Success {
            status_code: 201,
            decoded_body: json!({"id": 101, "title": "T", "body": "B"}),
        }
    );
}

#[tokio::test]
async fn test_update_sends_put_to_item() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/posts/7"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "T", "body": "B"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let request = api_for(&server).update_post("7", &draft()).unwrap();
    let outcome = execute(&create_client(), &request).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_delete_ignores_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/posts/5"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let outcome = execute(&create_client(), &api_for(&server).delete_post("5")).await;
    assert_eq!(
        outcome,
        Outcome::Success {
            status_code: 200,
            decoded_body: serde_json::Value::Null,
        }
    );
}

#[tokio::test]
async fn test_create_server_error_classifies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = api_for(&server).create_post(&draft()).unwrap();
    let outcome = execute(&create_client(), &request).await;
    let Outcome::Failure { message, .. } = outcome else {
        panic!("expected failure");
    };
    assert_eq!(
        classify_fetch_error(&message),
        "Error 500: Server error. Please try again later."
    );
}
