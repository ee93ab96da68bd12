// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drives [`ReqwestSignUpClient`] against a [`wiremock::MockServer`] on localhost.

use pretty_assertions::assert_eq;
use signup_form::{Document, FieldValues, HeadlessDocument, ProcessState,
                  ReqwestSignUpClient, SignUpClient, SignUpConfig, SignUpError,
                  SignUpPage, SubmitError, config_constants};
use wiremock::{Mock, MockServer, ResponseTemplate,
               matchers::{body_json, header, method, path}};

/// ╭──────────────────────────────────────────────────────╮
/// │ Fixtures.                                            │
/// ╰──────────────────────────────────────────────────────╯
const USERS_PATH: &str = "/users";

fn valid_values() -> FieldValues {
    FieldValues {
        name: "a".to_string(),
        email: "a@b.com".to_string(),
        password: "abcdef".to_string(),
        password_confirmation: "abcdef".to_string(),
    }
}

fn expected_body() -> serde_json::Value {
    serde_json::json!({
        "name": "a",
        "email": "a@b.com",
        "password": "abcdef",
        "passwordConfirmation": "abcdef",
    })
}

/// Answers `status` to exactly one POST of [`expected_body`] sent with `user_agent`.
/// Anything else gets the server's default 404.
async fn start_server(status: u16, user_agent: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", user_agent))
        .and(body_json(expected_body()))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String { format!("{}{USERS_PATH}", server.uri()) }

fn fill_valid<D: Document, C: SignUpClient>(page: &mut SignUpPage<D, C>) {
    for (field, value) in valid_values().iter() {
        page.handle_input(field, value).unwrap();
    }
}

/// ╭──────────────────────────────────────────────────────╮
/// │ Tests.                                               │
/// ╰──────────────────────────────────────────────────────╯
#[tokio::test]
async fn test_post_sends_json_body() {
    let server = start_server(201, config_constants::DEFAULT_USER_AGENT).await;
    let client = ReqwestSignUpClient::try_new(
        &SignUpConfig::default().with_endpoint(endpoint(&server)),
    )
    .unwrap();

    client.post_fields(&valid_values()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body_json::<serde_json::Value>().unwrap(),
        expected_body()
    );
}

#[tokio::test]
async fn test_non_2xx_is_a_status_error() {
    let server = start_server(500, config_constants::DEFAULT_USER_AGENT).await;
    let client = ReqwestSignUpClient::try_new(
        &SignUpConfig::default().with_endpoint(endpoint(&server)),
    )
    .unwrap();

    let result = client.post_fields(&valid_values()).await;

    assert!(matches!(result, Err(SubmitError::Status { status: 500 })));
}

#[tokio::test]
async fn test_page_end_to_end() {
    let server = start_server(200, "signup-tests/1.0").await;
    let config = SignUpConfig::default()
        .with_endpoint(endpoint(&server))
        .with_user_agent("signup-tests/1.0");
    let client = ReqwestSignUpClient::try_new(&config).unwrap();
    let mut page =
        SignUpPage::try_new(HeadlessDocument::sign_up_page(), client, config).unwrap();

    fill_valid(&mut page);
    page.submit().await.unwrap();

    assert_eq!(page.state().process_state, ProcessState::Finished);
    let container = page.elements().container;
    assert_eq!(page.document().text_content(container), "User Created!");
}

#[tokio::test]
async fn test_page_end_to_end_failure() {
    let server = start_server(422, config_constants::DEFAULT_USER_AGENT).await;
    let config = SignUpConfig::default().with_endpoint(endpoint(&server));
    let client = ReqwestSignUpClient::try_new(&config).unwrap();
    let mut page =
        SignUpPage::try_new(HeadlessDocument::sign_up_page(), client, config).unwrap();

    fill_valid(&mut page);
    let result = page.submit().await;

    assert!(matches!(
        result,
        Err(SignUpError::Submit {
            source: SubmitError::Status { status: 422 }
        })
    ));
    assert_eq!(page.state().process_state, ProcessState::Failed);
    let submit = page.elements().submit;
    assert!(!page.document().is_disabled(submit));
}

#[tokio::test]
async fn test_wrong_path_gets_a_404() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let client = ReqwestSignUpClient::try_new(
        &SignUpConfig::default().with_endpoint(format!("{}/signup", server.uri())),
    )
    .unwrap();

    let result = client.post_fields(&valid_values()).await;

    assert!(matches!(result, Err(SubmitError::Status { status: 404 })));
}
