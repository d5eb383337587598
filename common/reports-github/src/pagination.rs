//! `Link` header pagination
//!
//! GitHub chains list responses with a header such as:
//! `<https://api.github.com/user/repos?page=2>; rel="next", <https://api.github.com/user/repos?page=5>; rel="last"`

use crate::client::{DEFAULT_ACCEPTED_STATUSES, GitHubClient, Method};
use crate::error::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Extract the `rel="next"` URL from a `Link` header value
///
/// Returns `None` when there is no `rel="next"` entry or the entry has no
/// `<...>` delimited URL.
pub fn next_page_url(link_header: &str) -> Option<String> {
    let segment = link_header
        .split(',')
        .find(|segment| segment.contains(r#"rel="next""#))?;

    let start = segment.find('<')? + 1;
    let end = start + segment[start..].find('>')?;
    let url = segment[start..end].trim();

    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

impl GitHubClient {
    /// Fetch every page of a list endpoint, starting at `initial_url`
    ///
    /// Each page body must be a JSON array; elements are appended in page
    /// order. The first failing page aborts the whole fetch.
    pub async fn fetch_all_pages<T: DeserializeOwned>(&self, initial_url: &str) -> Result<Vec<T>> {
        let mut results = Vec::new();
        let mut next = Some(initial_url.to_string());
        let mut page = 0usize;

        while let Some(url) = next {
            page += 1;
            let response = self
                .perform(Method::Get, &url, None, DEFAULT_ACCEPTED_STATUSES)
                .await?;

            let items: Vec<T> = response.json()?;
            debug!(page, items = items.len(), "fetched page");
            results.extend(items);

            next = response.next_page_url();
        }

        Ok(results)
    }
}
