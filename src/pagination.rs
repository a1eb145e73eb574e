// Paged list traversal.
// Pulls fixed-size pages on demand and flattens them into one item sequence.

use std::collections::VecDeque;

use reqwest::Method;
use serde_json::Value;

use crate::client::{GitHubClient, Params};
use crate::error::Result;

/// Items requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Converts one page's raw response into the items it contains.
pub(crate) type ItemExtractor = fn(Value) -> Vec<Value>;

/// Lazy traversal over a paginated list endpoint.
///
/// Pages are numbered from 1 and fetched only once the previous page's items
/// have been consumed. The sequence ends at the first page that yields no
/// items; a short but non-empty page does not end it. Each endpoint call
/// produces a fresh traversal starting back at page 1.
pub struct Paged<'a> {
    client: &'a GitHubClient,
    path: String,
    params: Params,
    extract: ItemExtractor,
    page: u32,
    buffer: VecDeque<Value>,
    done: bool,
}

impl<'a> Paged<'a> {
    pub(crate) fn new(client: &'a GitHubClient, path: String, params: Params) -> Self {
        Self::with_extractor(client, path, params, list_items)
    }

    /// Paged traversal with a custom item extractor, for endpoints whose
    /// items need transformation before they are emitted.
    pub(crate) fn with_extractor(
        client: &'a GitHubClient,
        path: String,
        params: Params,
        extract: ItemExtractor,
    ) -> Self {
        Self {
            client,
            path,
            params,
            extract,
            page: 1,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Yield the next item, fetching the next page if the current one is
    /// exhausted. Returns `Ok(None)` once the sequence has ended.
    pub async fn try_next(&mut self) -> Result<Option<Value>> {
        if self.buffer.is_empty() && !self.done {
            self.fetch_page().await?;
        }
        Ok(self.buffer.pop_front())
    }

    /// Drain the remaining items into a vector.
    pub async fn collect_all(mut self) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let mut params = self.params.clone();
        params.insert("page".into(), Value::String(self.page.to_string()));
        params.insert("per_page".into(), Value::String(PAGE_SIZE.to_string()));

        tracing::debug!("fetching {} page {}", self.path, self.page);
        let response = self.client.request(Method::GET, &self.path, &params).await?;

        let items = (self.extract)(response);
        if items.is_empty() {
            self.done = true;
        } else {
            self.page += 1;
            self.buffer.extend(items);
        }
        Ok(())
    }
}

/// Default extractor: each element of a list response is one item.
fn list_items(response: Value) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}
