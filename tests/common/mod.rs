// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fitboard::api::ApiClient;
use fitboard::config::Config;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create an API client pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> ApiClient {
    let config = Config::with_base(&server.uri()).expect("mock server uri is valid");
    ApiClient::new(&config)
}

/// Mount a successful GET returning the given JSON body.
#[allow(dead_code)]
pub async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a GET answering with the given error status.
#[allow(dead_code)]
pub async fn mount_get_error(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount a successful GET that responds after a delay.
#[allow(dead_code)]
pub async fn mount_get_delayed(server: &MockServer, route: &str, body: Value, delay_ms: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(std::time::Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

/// Mount an error GET that responds after a delay.
#[allow(dead_code)]
pub async fn mount_get_error_delayed(server: &MockServer, route: &str, status: u16, delay_ms: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_delay(std::time::Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}
