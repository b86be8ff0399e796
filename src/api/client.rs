use crate::api::models::{
    ApiErrorBody, DeletionRequest, ReviewAction, ReviewBody, UploadResult, UploadTarget,
};
use crate::api::{IngestionApi, ReviewApi};
use crate::errors::{AppError, AppResult};
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bearer credential attached to every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Blocking client for the faculty backend.
pub struct ApiClient {
    http: Client,
    base_url: String,
    credential: Option<Credential>,
}

impl ApiClient {
    pub fn new(base_url: &str, credential: Option<Credential>) -> AppResult<Self> {
        Self::with_timeout(base_url, credential, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        credential: Option<Credential>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fxsheet/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Some(c) => req.bearer_auth(c.token()),
            None => req,
        }
    }

    /// Map non-2xx responses to `Unauthorized` or `Server { status, message }`.
    fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("backend answered 401 for {}", resp.url());
            return Err(AppError::Unauthorized);
        }

        let body = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());

        warn!("backend answered {status}: {body}");

        Err(AppError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

impl IngestionApi for ApiClient {
    fn upload(&self, target: UploadTarget, file: &Path) -> AppResult<UploadResult> {
        let url = self.url(target.endpoint());
        debug!("POST {url} (file {})", file.display());

        let form = multipart::Form::new().file("file", file)?;
        let resp = self.authorize(self.http.post(&url)).multipart(form).send()?;
        let resp = Self::check(resp)?;

        Ok(resp.json::<UploadResult>()?)
    }
}

impl ReviewApi for ApiClient {
    fn list_requests(&self) -> AppResult<Vec<DeletionRequest>> {
        let url = self.url("/api/academic/admin/deletion-requests/");
        debug!("GET {url}");

        let resp = self.authorize(self.http.get(&url)).send()?;
        let resp = Self::check(resp)?;

        Ok(resp.json::<Vec<DeletionRequest>>()?)
    }

    fn review(&self, id: i64, action: ReviewAction) -> AppResult<()> {
        let url = self.url(&format!("/api/academic/admin/deletion-requests/{id}/"));
        debug!("POST {url} action={}", action.as_str());

        let resp = self
            .authorize(self.http.post(&url))
            .json(&ReviewBody { action })
            .send()?;
        Self::check(resp)?;

        Ok(())
    }
}
