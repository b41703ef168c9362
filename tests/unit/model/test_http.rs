use crate::fixtures::*;
use appwash_client::model::http::{build_http_client, endpoint_url, make_http_request};
use appwash_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[test]
fn endpoint_url_joins_without_double_slashes() {
    assert_eq!(
        endpoint_url("https://host/api-rest/", "/login"),
        "https://host/api-rest/login"
    );
    assert_eq!(
        endpoint_url("https://host/api-rest", "connector/1"),
        "https://host/api-rest/connector/1"
    );
}

#[test]
fn http_method_codes() {
    assert_eq!(HttpMethod::Post.to_string(), "POST");
    assert_eq!("DELETE".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    assert!(HttpMethod::has("GET"));
    assert!(!HttpMethod::has("get"));
    assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
}

#[tokio::test]
async fn request_returns_body_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/connector/1")
        .match_header("token", TOKEN)
        .match_header("platform", "appWash")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(not_found().to_string())
        .create_async()
        .await;

    let config = test_config(&server.url());
    let client = build_http_client(&config).unwrap();
    let value = make_http_request::<()>(
        &client,
        &config,
        HttpMethod::Get,
        "/connector/1",
        Some(TOKEN),
        None,
        Some(&[("page", "2")]),
    )
    .await
    .unwrap();

    // error codes are left to the caller
    assert_eq!(value, not_found());
    mock.assert_async().await;
}

#[tokio::test]
async fn request_decodes_body_of_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/connector/1/start")
        .with_status(500)
        .with_body(not_found().to_string())
        .create_async()
        .await;

    let config = test_config(&server.url());
    let client = build_http_client(&config).unwrap();
    let value = make_http_request(
        &client,
        &config,
        HttpMethod::Post,
        "/connector/1/start",
        Some(TOKEN),
        Some(&json!({"sourceChannel": "WEBSITE"})),
        None,
    )
    .await
    .unwrap();

    assert_eq!(value["errorCode"], 33);
}

#[tokio::test]
async fn request_with_non_json_body_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/connector/1")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let config = test_config(&server.url());
    let client = build_http_client(&config).unwrap();
    let err = make_http_request::<()>(
        &client,
        &config,
        HttpMethod::Get,
        "/connector/1",
        None,
        None,
        None,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn dispatcher_attaches_token_except_on_login() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/login")
        .match_header("token", Matcher::Missing)
        .with_status(200)
        .with_body(login_ok(in_one_hour()).to_string())
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/connector/1")
        .match_header("token", TOKEN)
        .with_status(200)
        .with_body(json!({"errorCode": 0}).to_string())
        .create_async()
        .await;

    let dispatcher = HttpClient::new_lazy(test_config(&server.url())).unwrap();
    let value = dispatcher.delete("/connector/1").await.unwrap();

    assert_eq!(value["errorCode"], 0);
    login.assert_async().await;
    delete.assert_async().await;
}
