//! Thin client for the GitHub REST API.
//!
//! Maps function calls onto single HTTP requests and unwraps responses into
//! raw [`serde_json::Value`] payloads. Covers repository listing, repository
//! property updates, watch subscriptions, and webhook listing. No schema
//! modeling, no caching, no retries.
//!
//! # Authentication
//!
//! The client works with or without a token. Unauthenticated requests see
//! public data only and much lower rate limits.
//!
//! ```no_run
//! use ghapi::GitHubClient;
//!
//! # async fn example() -> ghapi::Result<()> {
//! // Explicit token, or None for unauthenticated access.
//! let client = GitHubClient::new(Some("ghp_example"))?;
//!
//! // Or from the GITHUB_TOKEN environment variable.
//! let client = GitHubClient::from_env()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Pagination
//!
//! List endpoints return a [`Paged`] traversal that fetches 20-item pages on
//! demand and ends at the first empty page:
//!
//! ```no_run
//! use ghapi::GitHubClient;
//!
//! # async fn example() -> ghapi::Result<()> {
//! let client = GitHubClient::from_env()?;
//!
//! let mut repos = client.list_user_repositories("owner");
//! while let Some(repo) = repos.try_next().await? {
//!     println!("{}", repo["full_name"]);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;
mod error;
mod pagination;
mod types;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use pagination::{PAGE_SIZE, Paged};
pub use types::RepositoryUpdate;
