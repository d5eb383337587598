//! Public event listing

use crate::client::GitHubClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A public event performed by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub event_type: String,
    pub repo_name: String,
}

#[derive(Deserialize)]
struct EventPayload {
    #[serde(rename = "type")]
    event_type: String,
    repo: EventRepo,
}

#[derive(Deserialize)]
struct EventRepo {
    name: String,
}

impl From<EventPayload> for Event {
    fn from(payload: EventPayload) -> Self {
        Self {
            event_type: payload.event_type,
            repo_name: payload.repo.name,
        }
    }
}

impl GitHubClient {
    /// List every public event for `username`, following all pages
    pub async fn public_events_for_user(&self, username: &str) -> Result<Vec<Event>> {
        let url = self.url(&format!("/users/{}/events/public", username));
        let events: Vec<EventPayload> = self.fetch_all_pages(&url).await?;

        Ok(events.into_iter().map(Event::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_public_events_for_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/events/public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "1", "type": "PushEvent", "repo": {"id": 7, "name": "a/b"}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::new("t").with_base_url(server.uri());
        let events = client.public_events_for_user("octocat").await.unwrap();

        assert_eq!(
            events,
            vec![Event {
                event_type: "PushEvent".to_string(),
                repo_name: "a/b".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_public_events_for_user_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/quiet/events/public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = GitHubClient::new("t").with_base_url(server.uri());
        let events = client.public_events_for_user("quiet").await.unwrap();

        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_public_events_for_unknown_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost/events/public"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#),
            )
            .mount(&server)
            .await;

        let client = GitHubClient::new("t").with_base_url(server.uri());
        let err = client.public_events_for_user("ghost").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("Not Found"));
    }
}
