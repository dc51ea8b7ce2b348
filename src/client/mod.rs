pub mod resource;

use axum::http::HeaderMap;
use log::{debug, info};
use reqwest::Method;
use serde_json::{Map, Value};

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::{Budget, Category, Credentials, Group, SendInvite, Session, Spending};
use self::resource::ResourceService;

/// HTTP client for the backend API.
///
/// Translates resource operations into requests against a single base URL,
/// attaching whatever auth headers the caller supplies. One best-effort
/// round trip per call; errors go straight back to the handler.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Send one request. Non-success statuses become `AppError::Backend`,
    /// an empty success body becomes an empty JSON object.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        data: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Value, AppError> {
        let url = format!("{}/{}", self.base_url, path);
        info!("{method} {url}");

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(data) = data {
            request = request.json(data);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Backend(status));
        }

        let text = response.text().await?;
        debug!("response from {url}: {} bytes", text.len());
        if text.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get(&self, path: &str, headers: HeaderMap) -> Result<Value, AppError> {
        self.send(Method::GET, path, None, headers).await
    }

    pub async fn delete(&self, path: &str, headers: HeaderMap) -> Result<Value, AppError> {
        self.send(Method::DELETE, path, None, headers).await
    }

    pub async fn post(&self, path: &str, data: &Value, headers: HeaderMap) -> Result<Value, AppError> {
        self.send(Method::POST, path, Some(data), headers).await
    }

    pub async fn put(&self, path: &str, data: &Value, headers: HeaderMap) -> Result<Value, AppError> {
        self.send(Method::PUT, path, Some(data), headers).await
    }

    // Per-resource services. All share the save/fetch/list conventions.

    pub fn groups(&self) -> ResourceService<'_, Group> {
        ResourceService::new(self)
    }

    pub fn spendings(&self) -> ResourceService<'_, Spending> {
        ResourceService::new(self)
    }

    pub fn budgets(&self) -> ResourceService<'_, Budget> {
        ResourceService::new(self)
    }

    pub fn categories(&self) -> ResourceService<'_, Category> {
        ResourceService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService { client: self }
    }

    pub fn invites(&self) -> InviteService<'_> {
        InviteService { client: self }
    }
}

/// Registration and login. Pre-authentication, so no auth headers here.
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl UserService<'_> {
    pub async fn register(&self, credentials: &Credentials) -> Result<Session, AppError> {
        let data = serde_json::to_value(credentials)?;
        let body = self.client.post("user/register", &data, HeaderMap::new()).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        let data = serde_json::to_value(credentials)?;
        let body = self.client.post("user/login", &data, HeaderMap::new()).await?;
        Ok(serde_json::from_value(body)?)
    }
}

/// Group invitations. Create-only, so this does not fit `ResourceService`.
pub struct InviteService<'a> {
    client: &'a ApiClient,
}

impl InviteService<'_> {
    pub async fn send(&self, invite: &SendInvite, auth: HeaderMap) -> Result<(), AppError> {
        let data = serde_json::to_value(invite)?;
        self.client.post("invite", &data, auth).await?;
        Ok(())
    }
}
