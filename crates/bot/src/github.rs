//! GitHub REST adapter for the `RepoHost` interface.
//!
//! The boundary where transport failures die: every error is logged and
//! converted to `false` or an empty result, so the engines above only ever
//! see best-effort outcomes.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use taxonomy::{Category, LiveLabel};
use tracing::{debug, warn};
use triage::{Issue, IssueComment, PrFilter, PrQuery, PullRequest, Release, ReleaseKind, RepoHost};

const GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("shepherd-bot/", env!("CARGO_PKG_VERSION"));

/// A `RepoHost` backed by the GitHub REST v3 API for one repository.
pub struct GitHubHost {
    http: reqwest::Client,
    api_base: String,
    owner: String,
    repo: String,
    token: String,
}

impl GitHubHost {
    #[must_use]
    pub fn new(token: impl Into<String>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: GITHUB_API.to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
        }
    }

    /// Points the adapter at a different API root (tests).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}{path}", self.api_base, self.owner, self.repo)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT);
        if !self.token.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.token));
        }
        builder
    }

    /// GET + JSON decode; any failure is logged and surfaces as `None`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let response = match self.request(Method::GET, path).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(path, error = %error, "GitHub request failed");
                return None;
            }
        };
        if !response.status().is_success() {
            debug!(path, status = %response.status(), "GitHub request unsuccessful");
            return None;
        }
        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(path, error = %error, "failed to decode GitHub response");
                None
            }
        }
    }

    /// Sends a mutating request; success is any 2xx status.
    async fn send_expect_success(&self, builder: RequestBuilder, path: &str) -> bool {
        match builder.send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(path, status = %response.status(), "GitHub mutation rejected");
                false
            }
            Err(error) => {
                warn!(path, error = %error, "GitHub mutation failed");
                false
            }
        }
    }
}

#[async_trait]
impl RepoHost for GitHubHost {
    async fn list_labels(&self) -> Vec<LiveLabel> {
        self.get_json("/labels?per_page=100").await.unwrap_or_default()
    }

    async fn create_label(&self, name: &str, description: &str, color: &str) -> bool {
        let builder = self.request(Method::POST, "/labels").json(&json!({
            "name": name,
            "description": description,
            "color": color,
        }));
        self.send_expect_success(builder, "/labels").await
    }

    async fn update_label(&self, old_name: &str, new_name: &str, description: &str, color: &str) -> bool {
        let path = format!("/labels/{}", urlencoding::encode(old_name));
        let builder = self.request(Method::PATCH, &path).json(&json!({
            "new_name": new_name,
            "description": description,
            "color": color,
        }));
        self.send_expect_success(builder, &path).await
    }

    async fn replace_labels(&self, item: u64, remove: &[String], add: &[String]) -> bool {
        let mut ok = true;

        // Removal failures are logged but never block the additions.
        for name in remove {
            let path = format!("/issues/{item}/labels/{}", urlencoding::encode(name));
            let removed = self.send_expect_success(self.request(Method::DELETE, &path), &path).await;
            if !removed {
                warn!(item, label = %name, "failed to remove label");
            }
            ok &= removed;
        }

        if !add.is_empty() {
            let path = format!("/issues/{item}/labels");
            let builder = self.request(Method::POST, &path).json(&json!({ "labels": add }));
            ok &= self.send_expect_success(builder, &path).await;
        }

        ok
    }

    async fn post_comment(&self, item: u64, body: &str) -> bool {
        let path = format!("/issues/{item}/comments");
        let builder = self.request(Method::POST, &path).json(&json!({ "body": body }));
        self.send_expect_success(builder, &path).await
    }

    async fn list_comments(&self, item: u64) -> Vec<IssueComment> {
        self.get_json(&format!("/issues/{item}/comments?per_page=100"))
            .await
            .unwrap_or_default()
    }

    async fn list_pull_requests(&self, query: &PrQuery) -> Vec<PullRequest> {
        // Merged PRs are closed PRs with a merge timestamp; the REST API has
        // no merged filter, so the window and label filters run client-side.
        let path = match query.filter {
            PrFilter::All => "/pulls?state=all&per_page=100",
            PrFilter::Draft => "/pulls?state=open&per_page=100",
            PrFilter::Merged | PrFilter::Changelogable => "/pulls?state=closed&per_page=100",
        };
        let fetched: Vec<PullRequest> = self.get_json(path).await.unwrap_or_default();
        let changelog_namespace = Category::Changelog.namespace();

        fetched
            .into_iter()
            .filter(|pr| match query.filter {
                PrFilter::All => true,
                PrFilter::Draft => pr.draft,
                PrFilter::Merged => pr.is_merged(),
                PrFilter::Changelogable => {
                    pr.is_merged() && !pr.labels.iter().any(|label| label.name.contains(&changelog_namespace))
                }
            })
            .filter(|pr| match query.since {
                Some(since) => pr.merged_at.is_some_and(|merged| merged >= since),
                None => true,
            })
            .filter(|pr| match &query.author {
                Some(author) => pr.user.as_ref().is_some_and(|user| &user.login == author),
                None => true,
            })
            .collect()
    }

    async fn issue(&self, number: u64) -> Option<Issue> {
        self.get_json(&format!("/issues/{number}")).await
    }

    async fn last_release(&self, kind: ReleaseKind) -> Option<Release> {
        // Listed most-recent first; drafts only appear with sufficient scope.
        let releases: Vec<Release> = self.get_json("/releases?per_page=30").await.unwrap_or_default();
        releases.into_iter().find(|release| match kind {
            ReleaseKind::Draft => release.draft,
            ReleaseKind::Published => !release.draft,
        })
    }

    async fn update_release(&self, release: &Release) -> bool {
        let path = format!("/releases/{}", release.id);
        let builder = self.request(Method::PATCH, &path).json(&json!({ "body": release.body }));
        self.send_expect_success(builder, &path).await
    }
}

impl GitHubHost {
    /// The `owner/name` slug, for logs.
    #[must_use]
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
