use crate::errors::*;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

pub const API_BASE: &str = "xray/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Authenticated access to the platform api
#[async_trait]
pub trait PlatformClient: Send + Sync {
    async fn post(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse, ApiError>;
    async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError>;
}

pub struct XrayClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl XrayClient {
    pub fn new(base_url: &str, token: Option<String>) -> XrayClient {
        XrayClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_BASE, path)
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let mut req = req.header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl PlatformClient for XrayClient {
    async fn post(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse, ApiError> {
        debug!("Sending POST request to {:?}", path);
        let mut req = self.http.post(self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }
        self.execute(req).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        debug!("Sending DELETE request to {:?}", path);
        self.execute(self.http.delete(self.url(path))).await
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::sync::Mutex;

    /// In-memory PlatformClient feeding canned responses in order and
    /// recording every request it receives
    pub struct FakeClient {
        responses: Mutex<Vec<Result<ApiResponse, ApiError>>>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeClient {
        pub fn with_responses(responses: Vec<Result<ApiResponse, ApiError>>) -> FakeClient {
            FakeClient {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn ok(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            })
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn next(&self, request: String) -> Result<ApiResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            let mut responses = self.responses.lock().unwrap();
            assert!(!responses.is_empty(), "FakeClient ran out of responses");
            responses.remove(0)
        }
    }

    #[async_trait]
    impl PlatformClient for FakeClient {
        async fn post(&self, path: &str, _body: Option<&Value>) -> Result<ApiResponse, ApiError> {
            self.next(format!("POST {}", path))
        }

        async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
            self.next(format!("DELETE {}", path))
        }
    }
}
