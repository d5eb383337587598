//! Common test support utilities and fixtures
//!
//! Shared wiremock setup for tests that talk to a fake GitHub API.

#![allow(dead_code)]

use reports::{CommandContext, GitHubClient};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "ghp_test_token";

/// A fake GitHub API and a client pointed at it
pub struct FakeGitHub {
    pub server: MockServer,
}

impl FakeGitHub {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(TEST_TOKEN).with_base_url(self.server.uri())
    }

    pub fn context(&self) -> CommandContext {
        CommandContext::new(self.client())
    }

    pub fn url(&self, api_path: &str) -> String {
        format!("{}{}", self.server.uri(), api_path)
    }

    /// `Link` header value pointing at `api_path` as the next page
    pub fn next_link(&self, api_path: &str) -> String {
        format!(
            "<{}>; rel=\"next\", <{}>; rel=\"last\"",
            self.url(api_path),
            self.url(api_path)
        )
    }

    /// Respond to `GET api_path` with a JSON body
    pub async fn get_json(&self, api_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to `http_method api_path` with a bare status
    pub async fn status(&self, http_method: &str, api_path: &str, status: u16) {
        Mock::given(method(http_method))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
