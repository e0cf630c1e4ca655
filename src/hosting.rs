//! Remote repository creation on the hosting platform.
//!
//! The hosting API is a capability trait so tests can substitute a stub
//! without network access. The real implementation talks to the GitHub
//! REST API with a personal access token.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::json;

use crate::constants::{GITHUB_API_BASE, USER_AGENT as AGENT};
use crate::error::{Error, Result};

/// A repository created on the hosting platform.
#[derive(Debug, Clone)]
pub struct CreatedRepository {
    /// Browser URL echoed to the user.
    pub html_url: String,
    /// HTTPS URL registered as the `origin` remote.
    pub clone_url: String,
}

/// Capability interface over the repository hosting API.
pub trait RepositoryHost {
    /// Login of the user the configured token authenticates as.
    fn current_user_login(&self) -> Result<String>;
    /// Creates a new public repository under the authenticated user.
    fn create_repository(&self, name: &str, description: &str) -> Result<CreatedRepository>;
}

/// GitHub-backed implementation of [`RepositoryHost`].
pub struct GitHubClient {
    client: Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Self {
        Self::with_api_base(token, GITHUB_API_BASE.to_string())
    }

    /// Points the client at a different API base, for tests.
    pub fn with_api_base(token: String, api_base: String) -> Self {
        Self { client: Client::new(), api_base, token }
    }

    fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.api_base, path);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .bearer_auth(&self.token)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HostingError(format!("GET {path} returned {status}")));
        }
        Ok(response.json()?)
    }

    fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.api_base, path);
        let response = self
            .client
            .post(&url)
            .header(USER_AGENT, AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .bearer_auth(&self.token)
            .json(body)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HostingError(format!("POST {path} returned {status}")));
        }
        Ok(response.json()?)
    }
}

fn string_field(value: &serde_json::Value, field: &str) -> Result<String> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| Error::HostingError(format!("response had no '{field}' field")))
}

impl RepositoryHost for GitHubClient {
    fn current_user_login(&self) -> Result<String> {
        let user = self.get_json("/user")?;
        string_field(&user, "login")
    }

    fn create_repository(&self, name: &str, description: &str) -> Result<CreatedRepository> {
        let body = json!({
            "name": name,
            "description": description,
            "private": false,
        });
        let repo = self.post_json("/user/repos", &body)?;
        Ok(CreatedRepository {
            html_url: string_field(&repo, "html_url")?,
            clone_url: string_field(&repo, "clone_url")?,
        })
    }
}
