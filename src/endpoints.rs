// GitHub API endpoint functions.
// Each maps its inputs onto one request or one paged traversal.

use reqwest::Method;
use serde_json::Value;

use crate::client::{GitHubClient, Params};
use crate::error::Result;
use crate::pagination::Paged;
use crate::types::RepositoryUpdate;

impl GitHubClient {
    /// List repositories for the authenticated user, filtered by repository
    /// type (`all`, `owner`, `public`, `private`, `member`).
    pub fn list_user_repositories(&self, repository_type: &str) -> Paged<'_> {
        let mut params = Params::new();
        params.insert("type".into(), Value::String(repository_type.into()));
        Paged::new(self, "user/repos".into(), params)
    }

    /// List repositories for an organization, filtered by repository type.
    pub fn list_org_repositories(&self, organization: &str, repository_type: &str) -> Paged<'_> {
        let mut params = Params::new();
        params.insert("type".into(), Value::String(repository_type.into()));
        Paged::new(
            self,
            format!("orgs/{}/repos", urlencoding::encode(organization)),
            params,
        )
    }

    /// Update repository properties.
    ///
    /// The PATCH body always names the repository and otherwise carries only
    /// the fields set on `update`.
    pub async fn update_repository(
        &self,
        owner: &str,
        repository: &str,
        update: &RepositoryUpdate,
    ) -> Result<Value> {
        let mut params = Params::new();
        params.insert("name".into(), Value::String(repository.into()));
        if let Value::Object(fields) = serde_json::to_value(update)? {
            params.extend(fields);
        }

        self.request(
            Method::PATCH,
            &format!(
                "repos/{}/{}",
                urlencoding::encode(owner),
                urlencoding::encode(repository)
            ),
            &params,
        )
        .await
    }

    /// List repositories the authenticated user is watching.
    pub fn list_user_subscriptions(&self) -> Paged<'_> {
        Paged::new(self, "user/subscriptions".into(), Params::new())
    }

    /// Get the authenticated user's subscription to a repository.
    pub async fn repository_subscription(&self, owner: &str, repository: &str) -> Result<Value> {
        self.request(
            Method::GET,
            &format!(
                "repos/{}/{}/subscription",
                urlencoding::encode(owner),
                urlencoding::encode(repository)
            ),
            &Params::new(),
        )
        .await
    }

    /// Set the authenticated user's subscription to a repository.
    pub async fn set_repository_subscription(
        &self,
        owner: &str,
        repository: &str,
        subscribed: bool,
        ignored: bool,
    ) -> Result<Value> {
        let mut params = Params::new();
        params.insert("subscribed".into(), Value::Bool(subscribed));
        params.insert("ignored".into(), Value::Bool(ignored));

        self.request(
            Method::PUT,
            &format!(
                "repos/{}/{}/subscription",
                urlencoding::encode(owner),
                urlencoding::encode(repository)
            ),
            &params,
        )
        .await
    }

    /// List webhooks configured on a repository. Returns the raw list from a
    /// single request; this endpoint is not paginated here.
    pub async fn list_repository_webhooks(&self, owner: &str, repository: &str) -> Result<Value> {
        self.request(
            Method::GET,
            &format!(
                "repos/{}/{}/hooks",
                urlencoding::encode(owner),
                urlencoding::encode(repository)
            ),
            &Params::new(),
        )
        .await
    }
}
